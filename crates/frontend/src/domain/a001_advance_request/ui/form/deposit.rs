//! Deposit into a member account: member search, account choice and the
//! optional exception document.

use super::common::{AmountField, AttachmentField, CommentField, FormActions};
use super::model;
use super::view_model::AdvanceFormVm;
use crate::shared::components::ui::{FieldErrorText, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_advance_request::aggregate::AdvanceRequestDto;
use contracts::domain::a001_advance_request::forms::deposit::{FIELD_ACCOUNT, FIELD_MEMBER};
use contracts::domain::a001_advance_request::forms::{
    DepositForm, FormContext, LookupTicket, SearchError,
};
use contracts::domain::lookups::{to_options, Member};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};
use wasm_bindgen_futures::spawn_local;

type DepositVm = AdvanceFormVm<DepositForm>;

fn search(vm: DepositVm) {
    let Some((ticket, term)) = vm.form.try_update(|f| f.begin_search()).flatten() else {
        return;
    };
    spawn_local(async move {
        let result = model::search_members(&term).await;
        vm.form.update(|f| {
            f.search_finished(ticket, result);
        });
    });
}

fn load_accounts(vm: DepositVm, ticket: LookupTicket, member_id: i64) {
    spawn_local(async move {
        let result = model::fetch_member_accounts(member_id).await;
        vm.form.update(|f| {
            f.accounts_loaded(ticket, result);
        });
    });
}

fn select(vm: DepositVm, member: Member) {
    let Some((ticket, member_id)) = vm.form.try_update(|f| f.select_member(member)) else {
        return;
    };
    vm.touch(FIELD_MEMBER);
    load_accounts(vm, ticket, member_id);
}

/// Edit mode: fetches the stored member and reselects it.
fn restore_member(vm: DepositVm) {
    let Some((ticket, member_id)) = vm.form.try_update(|f| f.begin_restore()).flatten() else {
        return;
    };
    spawn_local(async move {
        let result = model::fetch_member(member_id).await.map_err(|e| {
            log::warn!("Error al cargar socio {}: {}", member_id, e);
            SearchError::MemberLoadFailed
        });
        let next = vm.form.try_update(|f| f.restore_finished(ticket, result)).flatten();
        if let Some((accounts_ticket, id)) = next {
            load_accounts(vm, accounts_ticket, id);
        }
    });
}

#[component]
pub fn DepositFormView(
    ctx: FormContext,
    #[prop(into)] edit_mode: Signal<bool>,
    #[prop(into)] edit_data: Signal<Option<AdvanceRequestDto>>,
    on_saved: Callback<AdvanceRequestDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm: DepositVm = AdvanceFormVm::new(ctx);

    Effect::new(move |_| {
        if vm.on_inputs_changed(edit_mode.get(), edit_data.get()) {
            restore_member(vm);
        }
    });

    let lookup = move || vm.form.with(|f| f.lookup.clone());

    view! {
        <div class="advance-form advance-form--deposito">
            <AmountField vm=vm />

            <div class="form__group member-search">
                <label class="form__label">"Socio"</label>
                <div class="member-search__box">
                    <input
                        type="text"
                        class="form__input"
                        placeholder="ID de socio o DPI"
                        prop:value=move || vm.form.with(|f| f.lookup.term.clone())
                        disabled=move || vm.form.with(|f| f.lookup.selected.is_some())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            vm.update(|f| f.term_changed(&term));
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                search(vm);
                            }
                        }
                    />
                    <Show
                        when=move || vm.form.with(|f| f.lookup.selected.is_none())
                        fallback=move || view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.update(|f| f.clear_member())
                            >
                                {icon("close")}
                                " Cambiar"
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.form.with(|f| f.lookup.searching))
                            on_click=move |_| search(vm)
                        >
                            <Show when=move || vm.form.with(|f| f.lookup.searching) fallback=|| icon("search")>
                                <Spinner />
                            </Show>
                            " Buscar"
                        </Button>
                    </Show>
                </div>

                <Show when=move || vm.form.with(|f| f.lookup.show_results)>
                    <ul class="member-search__results">
                        <For
                            each=move || vm.form.with(|f| f.lookup.results.clone())
                            key=|m| m.id_socio
                            children=move |member: Member| {
                                let label = member.search_label();
                                let document = member.numero_identificacion.clone().unwrap_or_default();
                                view! {
                                    <li
                                        class="member-search__item"
                                        on:click=move |_| select(vm, member.clone())
                                    >
                                        <span class="member-search__name">{label}</span>
                                        <span class="member-search__doc">{document}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>

                {move || lookup().message().map(|msg| view! {
                    <div class="member-search__message">{msg}</div>
                })}
                <FieldErrorText error=vm.field_error(FIELD_MEMBER) />
            </div>

            <Show when=move || vm.form.with(|f| f.lookup.show_details)>
                {move || lookup().selected.map(|m| view! {
                    <div class="member-details">
                        <div class="member-details__row">
                            <span class="member-details__label">"Socio:"</span>
                            <span>{m.name.clone()}</span>
                        </div>
                        <div class="member-details__row">
                            <span class="member-details__label">"Identificación:"</span>
                            <span>{m.numero_identificacion.clone().unwrap_or_default()}</span>
                        </div>
                        {m.status.clone().map(|s| view! {
                            <div class="member-details__row">
                                <span class="member-details__label">"Estado:"</span>
                                <span>{s}</span>
                            </div>
                        })}
                    </div>
                })}
                <Show
                    when=move || !vm.form.with(|f| f.lookup.loading_accounts)
                    fallback=|| view! {
                        <div class="member-details__loading">
                            <Spinner />
                            " Cargando cuentas..."
                        </div>
                    }
                >
                    <Select
                        label="Cuenta destino"
                        placeholder="Seleccione una cuenta"
                        value=Signal::derive(move || vm.form.with(|f| f.account_id.clone()))
                        options=Signal::derive(move || vm.form.with(|f| to_options(&f.lookup.accounts)))
                        on_change=Callback::new(move |v: String| {
                            vm.update(|f| f.account_id = v);
                            vm.touch(FIELD_ACCOUNT);
                        })
                        error=vm.field_error(FIELD_ACCOUNT)
                    />
                </Show>
            </Show>

            <CommentField vm=vm />
            <AttachmentField state=vm.attachment label="Archivo de excepción (opcional)" />
            <FormActions vm=vm on_saved=on_saved on_cancel=on_cancel />
        </div>
    }
}
