use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_advance_request::aggregate::AttachmentRef;
use leptos::prelude::*;

#[component]
pub fn AttachmentPreview(attachment: AttachmentRef, on_close: Callback<()>) -> impl IntoView {
    let url = attachment.preview_url();

    view! {
        <div class="attachment-preview">
            <div class="attachment-preview__header">
                {icon("file")}
                <span class="attachment-preview__name">{attachment.file_name.clone()}</span>
                <button type="button" class="attachment-preview__close" title="Cerrar" on:click=move |_| on_close.run(())>
                    {icon("close")}
                </button>
            </div>
            <iframe class="attachment-preview__frame" src=url title=attachment.file_name></iframe>
        </div>
    }
}

/// Opens the preview of `attachment`, or reports `missing` when the file id is unknown.
pub fn open_preview(
    modal: ModalStackService,
    notifications: NotificationService,
    attachment: Option<AttachmentRef>,
    missing: &'static str,
) {
    let Some(attachment) = attachment else {
        notifications.error(missing);
        return;
    };
    log::debug!("Vista previa de {}", attachment.drive_id);
    modal.open(ModalSize::Large, move |handle| {
        view! {
            <AttachmentPreview
                attachment=attachment.clone()
                on_close=Callback::new(move |_| handle.close())
            />
        }
        .into_any()
    });
}
