use super::model;
use crate::shared::dialogs;
use crate::shared::lookups::LookupCache;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_advance_request::aggregate::AdvanceRequestDto;
use contracts::domain::a001_advance_request::attachment::validate_attachment;
use contracts::domain::a001_advance_request::forms::{routes, AdvanceForm, FormContext, SubmitGuard};
use contracts::shared::api_response::{transport_error_message, SubmitOutcome};
use leptos::html;
use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

/// Optional supporting document of a transfer or deposit.
#[derive(Clone, Copy)]
pub struct AttachmentState {
    pub file: RwSignal<Option<File>, LocalStorage>,
    pub input_ref: NodeRef<html::Input>,
    notifications: NotificationService,
}

impl AttachmentState {
    fn new(notifications: NotificationService) -> Self {
        Self {
            file: RwSignal::new_local(None),
            input_ref: NodeRef::new(),
            notifications,
        }
    }

    /// Keeps the file when its type and size are accepted; otherwise
    /// reports the problem and empties the input.
    pub fn select(&self, file: Option<File>) {
        let Some(file) = file else {
            return;
        };
        match validate_attachment(&file.type_(), file.size()) {
            Ok(()) => self.file.set(Some(file)),
            Err(e) => {
                self.notifications.error(e.to_string());
                self.clear_input();
            }
        }
    }

    pub fn remove(&self) {
        self.file.set(None);
        self.clear_input();
    }

    pub fn current(&self) -> Option<File> {
        self.file.get_untracked()
    }

    fn clear_input(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            input.set_value("");
        }
    }
}

/// State and actions of one modality form.
pub struct AdvanceFormVm<F: AdvanceForm> {
    pub form: RwSignal<F>,
    pub ctx: FormContext,
    saving: RwSignal<SubmitGuard>,
    pub attachment: AttachmentState,
    pub lookups: LookupCache,
    pub notifications: NotificationService,
    modal: ModalStackService,
    /// Id of the request being edited
    editing_id: RwSignal<Option<String>>,
    touched: RwSignal<HashSet<&'static str>>,
    submitted: RwSignal<bool>,
}

impl<F: AdvanceForm> Clone for AdvanceFormVm<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: AdvanceForm> Copy for AdvanceFormVm<F> {}

impl<F: AdvanceForm> AdvanceFormVm<F> {
    /// Builds the form and requests the reference lists it needs.
    pub fn new(ctx: FormContext) -> Self {
        let notifications = expect_context::<NotificationService>();
        let lookups = expect_context::<LookupCache>();
        lookups.load(F::reference_data(), Some(notifications));

        Self {
            form: RwSignal::new(F::new(&ctx)),
            ctx,
            saving: RwSignal::new(SubmitGuard::default()),
            attachment: AttachmentState::new(notifications),
            lookups,
            notifications,
            modal: expect_context::<ModalStackService>(),
            editing_id: RwSignal::new(None),
            touched: RwSignal::new(HashSet::new()),
            submitted: RwSignal::new(false),
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut F)) {
        self.form.update(f);
    }

    pub fn touch(&self, field: &'static str) {
        self.touched.update(|t| {
            t.insert(field);
        });
    }

    /// Validation message of `field`, once it was touched or a submit was attempted.
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let (form, touched, submitted) = (self.form, self.touched, self.submitted);
        Signal::derive(move || {
            let visible = submitted.get() || touched.with(|t| t.contains(field));
            if !visible {
                return None;
            }
            form.with(|f| f.validate().get(field).map(ToString::to_string))
        })
    }

    pub fn reset(&self) {
        self.form.set(F::new(&self.ctx));
        self.editing_id.set(None);
        self.touched.set(HashSet::new());
        self.submitted.set(false);
        self.attachment.remove();
    }

    pub fn load(&self, dto: &AdvanceRequestDto) {
        self.reset();
        let ctx = self.ctx;
        self.form.update(|f| f.load(dto, &ctx));
        self.editing_id.set(dto.id_solicitud.clone());
    }

    /// Reacts to the host inputs. Returns true when an existing request was loaded.
    pub fn on_inputs_changed(&self, edit_mode: bool, data: Option<AdvanceRequestDto>) -> bool {
        match data {
            Some(dto) if edit_mode => {
                self.load(&dto);
                true
            }
            _ => {
                self.reset();
                false
            }
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saving.with(SubmitGuard::in_flight)
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.with(Option::is_some)
    }

    /// Validates and sends the form. Ignored while a submission is in flight.
    pub fn submit(&self, on_saved: Callback<AdvanceRequestDto>, on_close: Callback<()>) {
        if self.saving.with_untracked(SubmitGuard::in_flight) {
            return;
        }
        let form = self.form.get_untracked();
        if !form.is_valid() {
            self.submitted.set(true);
            return;
        }

        let mut payload = form.to_payload(&self.ctx);
        payload.id_solicitud = self.editing_id.get_untracked();
        let route = routes::submit_route(payload.id_solicitud.as_deref());
        let file = self.attachment.current();
        log::debug!("Enviando solicitud {} a {}", F::KIND.code(), route);

        if !self.saving.try_update(SubmitGuard::try_begin).unwrap_or(false) {
            return;
        }
        let (saving, notifications, modal) = (self.saving, self.notifications, self.modal);
        spawn_local(async move {
            let result = model::submit(route, &payload, file).await;
            saving.update(SubmitGuard::finish);
            match result {
                Ok(resp) => match resp.into_outcome() {
                    SubmitOutcome::Saved { message } => {
                        notifications.success(message);
                        on_saved.run(payload);
                        on_close.run(());
                    }
                    SubmitOutcome::LimitInfo(info) => dialogs::show_limit_info(modal, &info),
                    SubmitOutcome::Warning { message } => dialogs::show_warning(modal, message),
                },
                Err(e) => {
                    log::error!("Error al guardar solicitud: {}", e);
                    notifications.error(transport_error_message(&e));
                }
            }
        });
    }
}
