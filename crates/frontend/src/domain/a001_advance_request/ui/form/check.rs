use super::common::{AmountField, CommentField, FormActions};
use super::view_model::AdvanceFormVm;
use crate::shared::components::ui::{Input, RadioGroup};
use contracts::domain::a001_advance_request::aggregate::AdvanceRequestDto;
use contracts::domain::a001_advance_request::forms::check::{FIELD_BENEFICIARY, FIELD_CONSIGNMENT};
use contracts::domain::a001_advance_request::forms::{CheckForm, Consignment, FormContext};
use leptos::prelude::*;

#[component]
pub fn CheckFormView(
    ctx: FormContext,
    #[prop(into)] edit_mode: Signal<bool>,
    #[prop(into)] edit_data: Signal<Option<AdvanceRequestDto>>,
    on_saved: Callback<AdvanceRequestDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AdvanceFormVm::<CheckForm>::new(ctx);

    Effect::new(move |_| {
        vm.on_inputs_changed(edit_mode.get(), edit_data.get());
    });

    let consignment_options: Vec<(String, String)> = Consignment::all()
        .iter()
        .map(|c| (c.label().to_string(), c.label().to_string()))
        .collect();

    view! {
        <div class="advance-form advance-form--cheque">
            <AmountField vm=vm />
            <Input
                label="Nombre del beneficiario"
                placeholder="Nombre completo"
                value=Signal::derive(move || vm.form.with(|f| f.beneficiary.clone()))
                on_input=Callback::new(move |v: String| vm.update(|f| f.beneficiary = v))
                on_blur=Callback::new(move |_| vm.touch(FIELD_BENEFICIARY))
                error=vm.field_error(FIELD_BENEFICIARY)
            />
            <RadioGroup
                label="Consignación"
                name="consignacion"
                options=Signal::stored(consignment_options)
                value=Signal::derive(move || {
                    vm.form.with(|f| f.consignment.map(|c| c.label().to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |v: String| {
                    vm.update(|f| f.consignment = Consignment::from_label(&v));
                    vm.touch(FIELD_CONSIGNMENT);
                })
                error=vm.field_error(FIELD_CONSIGNMENT)
            />
            <CommentField vm=vm />
            <FormActions vm=vm on_saved=on_saved on_cancel=on_cancel />
        </div>
    }
}
