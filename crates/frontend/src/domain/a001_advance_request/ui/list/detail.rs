use super::preview::open_preview;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_advance_request::aggregate::{AdvanceKind, AdvanceRequestRecord};
use contracts::domain::a001_advance_request::detail::{
    format_detail, DetailCatalogs, DetailField, DetailFieldKind,
};
use leptos::prelude::*;

const NO_EXCEPTION_FILE: &str = "No hay archivo de excepción disponible";
const NO_TRANSFER_RECEIPT: &str = "No hay comprobante de transferencia disponible";

/// File row of the detail: the deposit exception file or the transfer receipt.
fn preview_file(
    modal: ModalStackService,
    notifications: NotificationService,
    record: &AdvanceRequestRecord,
) {
    match record.kind() {
        Some(AdvanceKind::Transferencia) => {
            open_preview(modal, notifications, record.transfer_receipt(), NO_TRANSFER_RECEIPT)
        }
        _ => open_preview(modal, notifications, record.exception_file(), NO_EXCEPTION_FILE),
    }
}

#[component]
pub fn RequestDetailView(
    record: AdvanceRequestRecord,
    catalogs: DetailCatalogs,
    on_close: Callback<()>,
) -> impl IntoView {
    let detail = format_detail(&record, &catalogs);
    let record = StoredValue::new(record);
    let modal = expect_context::<ModalStackService>();
    let notifications = expect_context::<NotificationService>();

    let render_field = move |field: DetailField| {
        let value = match field.kind {
            DetailFieldKind::File => view! {
                <button
                    type="button"
                    class="detail__file-link"
                    on:click=move |_| record.with_value(|r| preview_file(modal, notifications, r))
                >
                    {icon("eye")}
                    " Ver archivo"
                </button>
            }
            .into_any(),
            DetailFieldKind::Status => view! { <Badge color="gray".to_string()>{field.value}</Badge> }.into_any(),
            DetailFieldKind::Amount => view! { <strong class="detail__amount">{field.value}</strong> }.into_any(),
            DetailFieldKind::Text => view! { <span>{field.value}</span> }.into_any(),
        };
        view! {
            <div class="detail__row">
                <dt class="detail__label">{field.label}</dt>
                <dd class="detail__value">{value}</dd>
            </div>
        }
    };

    view! {
        <div class=format!("detail detail--{}", detail.color)>
            <div class="detail__header">
                <h2 class="detail__title">{detail.title}</h2>
                <button type="button" class="detail__close" title="Cerrar" on:click=move |_| on_close.run(())>
                    {icon("close")}
                </button>
            </div>
            <dl class="detail__fields">
                {detail.fields.into_iter().map(render_field).collect_view()}
            </dl>
        </div>
    }
}

pub fn open_detail(modal: ModalStackService, record: AdvanceRequestRecord, catalogs: DetailCatalogs) {
    modal.open(ModalSize::Medium, move |handle| {
        view! {
            <RequestDetailView
                record=record.clone()
                catalogs=catalogs.clone()
                on_close=Callback::new(move |_| handle.close())
            />
        }
        .into_any()
    });
}
