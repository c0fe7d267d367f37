//! Blocking message and confirmation dialogs on top of the modal stack.

use crate::shared::modal_stack::{ModalSize, ModalStackService};
use contracts::shared::api_response::LimitInfo;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTone {
    Info,
    Warning,
}

impl DialogTone {
    fn class(&self) -> &'static str {
        match self {
            DialogTone::Info => "dialog dialog--info",
            DialogTone::Warning => "dialog dialog--warning",
        }
    }
}

/// Title, message and optional `label: value` lines with a single "Entendido" button.
pub fn show_message(
    modal: ModalStackService,
    tone: DialogTone,
    title: impl Into<String>,
    message: impl Into<String>,
    lines: Vec<(&'static str, String)>,
) {
    let title = title.into();
    let message = message.into();
    modal.open(ModalSize::Small, move |handle| {
        let lines = lines.clone();
        view! {
            <div class=tone.class()>
                <h3 class="dialog__title">{title.clone()}</h3>
                <p class="dialog__message">{message.clone()}</p>
                {(!lines.is_empty()).then(|| view! {
                    <dl class="dialog__lines">
                        {lines.into_iter().map(|(label, value)| view! {
                            <div class="dialog__line">
                                <dt>{label}":"</dt>
                                <dd>{value}</dd>
                            </div>
                        }).collect_view()}
                    </dl>
                })}
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| handle.close()>
                        "Entendido"
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}

pub fn show_warning(modal: ModalStackService, message: impl Into<String>) {
    show_message(modal, DialogTone::Warning, "Advertencia", message, Vec::new());
}

/// Limit check reply of a submission.
pub fn show_limit_info(modal: ModalStackService, info: &LimitInfo) {
    show_message(
        modal,
        DialogTone::Info,
        LimitInfo::TITLE,
        info.message.clone(),
        info.detail_lines(),
    );
}

/// Asks for confirmation; `on_confirm` runs after the dialog closes.
pub fn confirm(
    modal: ModalStackService,
    title: impl Into<String>,
    message: impl Into<String>,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
) {
    let title = title.into();
    let message = message.into();
    modal.open(ModalSize::Small, move |handle| {
        view! {
            <div class="dialog dialog--warning">
                <h3 class="dialog__title">{title.clone()}</h3>
                <p class="dialog__message">{message.clone()}</p>
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            handle.close();
                            on_confirm.run(());
                        }
                    >
                        {confirm_label}
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}
