use super::common::{AmountField, CommentField, FormActions};
use super::view_model::AdvanceFormVm;
use crate::shared::components::ui::{Checkbox, Select};
use contracts::domain::a001_advance_request::aggregate::AdvanceRequestDto;
use contracts::domain::a001_advance_request::forms::cash::{FIELD_AGENCY, FIELD_PICKUP_USER};
use contracts::domain::a001_advance_request::forms::{CashForm, FormContext};
use contracts::domain::lookups::to_options;
use leptos::prelude::*;

#[component]
pub fn CashFormView(
    ctx: FormContext,
    #[prop(into)] edit_mode: Signal<bool>,
    #[prop(into)] edit_data: Signal<Option<AdvanceRequestDto>>,
    on_saved: Callback<AdvanceRequestDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AdvanceFormVm::<CashForm>::new(ctx);
    let lookups = vm.lookups;

    Effect::new(move |_| {
        vm.on_inputs_changed(edit_mode.get(), edit_data.get());
    });

    view! {
        <div class="advance-form advance-form--efectivo">
            <AmountField vm=vm />
            <Select
                label="Agencia"
                placeholder="Seleccione una agencia"
                value=Signal::derive(move || vm.form.with(|f| f.agency.clone()))
                options=Signal::derive(move || to_options(&lookups.agencies.items()))
                disabled=Signal::derive(move || lookups.agencies.is_loading())
                on_change=Callback::new(move |v: String| {
                    vm.update(|f| f.agency = v);
                    vm.touch(FIELD_AGENCY);
                })
                error=vm.field_error(FIELD_AGENCY)
            />
            <Checkbox
                id="mismo-usuario-recoge"
                label="El mismo solicitante recoge el efectivo".to_string()
                checked=Signal::derive(move || vm.form.with(|f| f.same_user_picks_up()))
                on_change=Callback::new(move |same: bool| vm.update(|f| f.set_same_user(same)))
            />
            <Show when=move || vm.form.with(|f| f.shows_pickup_selector())>
                <Select
                    label="Usuario que recoge"
                    placeholder="Seleccione un usuario"
                    value=Signal::derive(move || vm.form.with(|f| f.pickup_user.clone()))
                    options=Signal::derive(move || to_options(&lookups.users.items()))
                    disabled=Signal::derive(move || lookups.users.is_loading())
                    on_change=Callback::new(move |v: String| {
                        vm.update(|f| f.pickup_user = v);
                        vm.touch(FIELD_PICKUP_USER);
                    })
                    error=vm.field_error(FIELD_PICKUP_USER)
                />
            </Show>
            <CommentField vm=vm />
            <FormActions vm=vm on_saved=on_saved on_cancel=on_cancel />
        </div>
    }
}
