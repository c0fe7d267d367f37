pub mod detail;
pub mod preview;
pub mod state;

use self::detail::open_detail;
use self::state::create_state;
use super::request::open_request_modal;
use crate::shared::components::ui::Badge;
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::shared::lookups::LookupCache;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notifications::NotificationService;
use crate::shared::query;
use contracts::domain::a001_advance_request::aggregate::{
    kind_presentation, AdvanceRequestDto, AdvanceRequestRecord,
};
use contracts::domain::a001_advance_request::detail::{beneficiary_summary, DetailCatalogs};
use contracts::domain::a001_advance_request::forms::{routes, FormContext, LookupKind};
use contracts::domain::lookups::Catalog;
use contracts::shared::format::{format_amount_str, format_short_date};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;
use thaw::{Button, ButtonAppearance, Spinner};

/// `tipo_solicitud` of regular purchase orders.
pub const DEFAULT_ORIGIN: i64 = 1;

const CATALOGS: [LookupKind; 3] = [LookupKind::Agencies, LookupKind::Banks, LookupKind::AccountTypes];

#[component]
#[allow(non_snake_case)]
pub fn AdvanceRequestsPanel(
    order_id: i64,
    /// Request origin, 1 when omitted
    #[prop(optional)]
    origin: Option<i64>,
    /// Hides create, edit and delete
    #[prop(optional)]
    read_only: bool,
    /// Fired after a create, edit or delete
    #[prop(optional)]
    on_changed: Option<Callback<Option<AdvanceRequestDto>>>,
) -> impl IntoView {
    let origin = origin.unwrap_or(DEFAULT_ORIGIN);
    let ctx = FormContext::new(order_id, origin);
    let state = create_state();
    let (loading, set_loading) = signal(false);

    let modal = expect_context::<ModalStackService>();
    let notifications = expect_context::<NotificationService>();
    let lookups = expect_context::<LookupCache>();

    let catalogs = Memo::new(move |_| DetailCatalogs {
        agencies: Catalog::from_options(&lookups.agencies.items()),
        banks: Catalog::from_options(&lookups.banks.items()),
        account_types: Catalog::from_options(&lookups.account_types.items()),
    });

    let load_requests = move || {
        if order_id == 0 {
            log::warn!("AdvanceRequestsPanel: id_orden no definido, no se cargan solicitudes");
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match fetch_requests(order_id, origin).await {
                Ok(items) => state.update(|s| {
                    s.items = items;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::error!("Error al cargar solicitudes de la orden {}: {}", order_id, e);
                    notifications.error(e);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        // catalog failures are only logged here
        lookups.load(&CATALOGS, None);
        load_requests();
    });

    let emit_changed = move |payload: Option<AdvanceRequestDto>| {
        if let Some(cb) = on_changed {
            cb.run(payload);
        }
    };

    let on_saved = Callback::new(move |payload: AdvanceRequestDto| {
        load_requests();
        emit_changed(Some(payload));
    });

    let create = move |_: leptos::ev::MouseEvent| open_request_modal(modal, None, ctx, on_saved);

    let edit = move |record: AdvanceRequestRecord| match AdvanceRequestDto::from_record(&record) {
        Some(dto) => open_request_modal(modal, Some(dto), ctx, on_saved),
        None => notifications.error(format!(
            "No se puede editar una solicitud de tipo \"{}\"",
            record.tipo
        )),
    };

    let delete = move |record: AdvanceRequestRecord| {
        let id = record.id_solicitud;
        dialogs::confirm(
            modal,
            "Anular solicitud",
            "¿Está seguro de que desea anular esta solicitud de anticipo?",
            "Anular",
            Callback::new(move |_| {
                if id == 0 {
                    return;
                }
                spawn_local(async move {
                    match cancel_request(id).await {
                        Ok(message) => {
                            state.update(|s| s.remove(id));
                            notifications.success(message);
                            emit_changed(None);
                        }
                        Err(e) => {
                            log::error!("Error al anular solicitud {}: {}", id, e);
                            notifications.error(e);
                        }
                    }
                });
            }),
        );
    };

    let show_detail = move |record: AdvanceRequestRecord| {
        open_detail(modal, record, catalogs.get_untracked());
    };

    view! {
        <div class="advance-panel">
            <div class="advance-panel__header">
                <h3 class="advance-panel__title">"Solicitudes de Anticipo"</h3>
                <Show when=move || !read_only>
                    <Button appearance=ButtonAppearance::Primary on_click=create>
                        {icon("plus")}
                        " Nueva Solicitud"
                    </Button>
                </Show>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="advance-panel__loading">
                        <Spinner />
                        " Cargando solicitudes..."
                    </div>
                }
            >
                <Show
                    when=move || state.with(|s| !s.items.is_empty())
                    fallback=|| view! {
                        <div class="advance-panel__empty">"No hay solicitudes de anticipo registradas"</div>
                    }
                >
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead>
                                <tr>
                                    <th>"Tipo"</th>
                                    <th>"Fecha"</th>
                                    <th class="text-right">"Monto"</th>
                                    <th>"Estado"</th>
                                    <th>"Beneficiario"</th>
                                    <th class="text-center">"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || state.with(|s| s.items.clone())
                                    key=|r| (r.id_solicitud, r.fecha_creacion.clone())
                                    children=move |record: AdvanceRequestRecord| {
                                        let kind = kind_presentation(&record.tipo);
                                        let status = record
                                            .nombre_estado
                                            .clone()
                                            .filter(|s| !s.trim().is_empty())
                                            .unwrap_or_else(|| "Pendiente".to_string());
                                        let row = StoredValue::new(record.clone());
                                        view! {
                                            <tr class="table__row">
                                                <td><Badge color=kind.color.to_string()>{kind.name}</Badge></td>
                                                <td>{format_short_date(&record.fecha_creacion)}</td>
                                                <td class="text-right">{format!("Q. {}", format_amount_str(&record.monto))}</td>
                                                <td>{status}</td>
                                                <td>{beneficiary_summary(&record)}</td>
                                                <td class="table__actions">
                                                    <button
                                                        type="button"
                                                        class="table__action"
                                                        title="Ver detalle"
                                                        on:click=move |_| show_detail(row.get_value())
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                    <Show when=move || !read_only>
                                                        <button
                                                            type="button"
                                                            class="table__action"
                                                            title="Editar"
                                                            on:click=move |_| edit(row.get_value())
                                                        >
                                                            {icon("edit")}
                                                        </button>
                                                        <button
                                                            type="button"
                                                            class="table__action table__action--danger"
                                                            title="Anular"
                                                            on:click=move |_| delete(row.get_value())
                                                        >
                                                            {icon("delete")}
                                                        </button>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

async fn fetch_requests(order_id: i64, origin: i64) -> Result<Vec<AdvanceRequestRecord>, String> {
    let resp = query::post::<_, Vec<AdvanceRequestRecord>>(
        routes::LIST,
        &json!({ "id_orden": order_id, "tipo_solicitud": origin }),
    )
    .await?;
    resp.into_data()
}

async fn cancel_request(id_solicitud: i64) -> Result<String, String> {
    let resp = query::post::<_, serde_json::Value>(
        routes::CANCEL,
        &json!({ "id_solicitud": id_solicitud }),
    )
    .await?;
    if resp.is_success() {
        Ok(resp.message_or("Solicitud anulada correctamente"))
    } else {
        Err(resp.message_or("No se pudo anular la solicitud"))
    }
}
