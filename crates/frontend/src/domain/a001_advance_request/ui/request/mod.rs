//! Create/edit dialog: modality picker plus the form of the chosen modality.

use super::form::{CashFormView, CheckFormView, DepositFormView, TransferFormView};
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use contracts::domain::a001_advance_request::aggregate::{AdvanceKind, AdvanceRequestDto};
use contracts::domain::a001_advance_request::forms::FormContext;
use leptos::prelude::*;

/// Modality shown when the dialog opens: the edited request's, or cash.
pub fn initial_kind(edit_mode: bool, data: Option<&AdvanceRequestDto>) -> AdvanceKind {
    match data {
        Some(dto) if edit_mode => dto.kind,
        _ => AdvanceKind::Efectivo,
    }
}

pub fn kind_card_class(kind: AdvanceKind, selected: bool) -> String {
    if selected {
        format!("kind-card kind-card--selected kind-card--{}", kind.color())
    } else {
        "kind-card kind-card--neutral".to_string()
    }
}

#[component]
pub fn AdvanceRequestModal(
    #[prop(into)] edit_mode: Signal<bool>,
    #[prop(into)] edit_data: Signal<Option<AdvanceRequestDto>>,
    order_id: i64,
    origin: i64,
    on_close: Callback<()>,
    on_saved: Callback<AdvanceRequestDto>,
) -> impl IntoView {
    let ctx = FormContext::new(order_id, origin);
    let kind = RwSignal::new(AdvanceKind::Efectivo);

    Effect::new(move |_| {
        let data = edit_data.get();
        kind.set(initial_kind(edit_mode.get(), data.as_ref()));
    });

    let close = Callback::new(move |_: ()| {
        kind.set(AdvanceKind::Efectivo);
        on_close.run(());
    });

    let title = move || {
        if edit_mode.get() {
            "Editar Solicitud de Anticipo"
        } else {
            "Nueva Solicitud de Anticipo"
        }
    };

    view! {
        <div class="advance-modal">
            <div class="advance-modal__header">
                <h2 class="advance-modal__title">{title}</h2>
                <button type="button" class="advance-modal__close" title="Cerrar" on:click=move |_| close.run(())>
                    {icon("close")}
                </button>
            </div>

            <div class="advance-modal__kinds">
                {AdvanceKind::all()
                    .into_iter()
                    .map(|k| view! {
                        <button
                            type="button"
                            class=move || kind_card_class(k, kind.get() == k)
                            on:click=move |_| kind.set(k)
                        >
                            <span class="kind-card__icon">{icon(k.code())}</span>
                            <span class="kind-card__name">{k.display_name()}</span>
                            <span class="kind-card__description">{k.description()}</span>
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="advance-modal__body">
                {move || match kind.get() {
                    AdvanceKind::Efectivo => view! {
                        <CashFormView ctx=ctx edit_mode=edit_mode edit_data=edit_data on_saved=on_saved on_cancel=close />
                    }
                    .into_any(),
                    AdvanceKind::Cheque => view! {
                        <CheckFormView ctx=ctx edit_mode=edit_mode edit_data=edit_data on_saved=on_saved on_cancel=close />
                    }
                    .into_any(),
                    AdvanceKind::Transferencia => view! {
                        <TransferFormView ctx=ctx edit_mode=edit_mode edit_data=edit_data on_saved=on_saved on_cancel=close />
                    }
                    .into_any(),
                    AdvanceKind::Deposito => view! {
                        <DepositFormView ctx=ctx edit_mode=edit_mode edit_data=edit_data on_saved=on_saved on_cancel=close />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// Opens the dialog on the modal stack; `edit` selects edit mode.
pub fn open_request_modal(
    modal: ModalStackService,
    edit: Option<AdvanceRequestDto>,
    ctx: FormContext,
    on_saved: Callback<AdvanceRequestDto>,
) {
    let edit_mode = edit.is_some();
    modal.open(ModalSize::Large, move |handle| {
        let edit = edit.clone();
        view! {
            <AdvanceRequestModal
                edit_mode=edit_mode
                edit_data=Signal::stored(edit)
                order_id=ctx.order_id
                origin=ctx.origin
                on_close=Callback::new(move |_| handle.close())
                on_saved=on_saved
            />
        }
        .into_any()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_kind() {
        let dto = AdvanceRequestDto {
            kind: AdvanceKind::Transferencia,
            ..Default::default()
        };
        assert_eq!(initial_kind(true, Some(&dto)), AdvanceKind::Transferencia);
        assert_eq!(initial_kind(false, Some(&dto)), AdvanceKind::Efectivo);
        assert_eq!(initial_kind(true, None), AdvanceKind::Efectivo);
    }

    #[test]
    fn test_kind_card_class() {
        assert_eq!(
            kind_card_class(AdvanceKind::Cheque, true),
            "kind-card kind-card--selected kind-card--green"
        );
        assert_eq!(kind_card_class(AdvanceKind::Cheque, false), "kind-card kind-card--neutral");
    }
}
