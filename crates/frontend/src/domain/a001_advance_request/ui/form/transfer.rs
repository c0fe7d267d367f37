use super::common::{AmountField, AttachmentField, CommentField, FormActions};
use super::view_model::AdvanceFormVm;
use crate::shared::components::ui::{Input, Select};
use contracts::domain::a001_advance_request::aggregate::AdvanceRequestDto;
use contracts::domain::a001_advance_request::forms::transfer::{
    FIELD_ACCOUNT_NAME, FIELD_ACCOUNT_NUMBER, FIELD_ACCOUNT_TYPE, FIELD_BANK,
};
use contracts::domain::a001_advance_request::forms::{FormContext, TransferForm};
use contracts::domain::lookups::to_options;
use leptos::prelude::*;

#[component]
pub fn TransferFormView(
    ctx: FormContext,
    #[prop(into)] edit_mode: Signal<bool>,
    #[prop(into)] edit_data: Signal<Option<AdvanceRequestDto>>,
    on_saved: Callback<AdvanceRequestDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AdvanceFormVm::<TransferForm>::new(ctx);
    let lookups = vm.lookups;

    Effect::new(move |_| {
        vm.on_inputs_changed(edit_mode.get(), edit_data.get());
    });

    view! {
        <div class="advance-form advance-form--transferencia">
            <AmountField vm=vm />
            <Input
                label="Nombre del titular"
                placeholder="Como aparece en la cuenta"
                value=Signal::derive(move || vm.form.with(|f| f.account_name.clone()))
                on_input=Callback::new(move |v: String| vm.update(|f| f.account_name = v))
                on_blur=Callback::new(move |_| vm.touch(FIELD_ACCOUNT_NAME))
                error=vm.field_error(FIELD_ACCOUNT_NAME)
            />
            <Input
                label="Número de cuenta"
                placeholder="Mínimo 8 dígitos"
                value=Signal::derive(move || vm.form.with(|f| f.account_number.clone()))
                on_input=Callback::new(move |v: String| vm.update(|f| f.account_number = v))
                on_blur=Callback::new(move |_| vm.touch(FIELD_ACCOUNT_NUMBER))
                error=vm.field_error(FIELD_ACCOUNT_NUMBER)
            />
            <div class="form__row">
                <Select
                    label="Banco"
                    placeholder="Seleccione un banco"
                    value=Signal::derive(move || vm.form.with(|f| f.bank.clone()))
                    options=Signal::derive(move || to_options(&lookups.banks.items()))
                    disabled=Signal::derive(move || lookups.banks.is_loading())
                    on_change=Callback::new(move |v: String| {
                        vm.update(|f| f.bank = v);
                        vm.touch(FIELD_BANK);
                    })
                    error=vm.field_error(FIELD_BANK)
                />
                <Select
                    label="Tipo de cuenta"
                    value=Signal::derive(move || vm.form.with(|f| f.account_type.clone()))
                    options=Signal::derive(move || to_options(&lookups.account_types.items()))
                    disabled=Signal::derive(move || lookups.account_types.is_loading())
                    on_change=Callback::new(move |v: String| {
                        vm.update(|f| f.account_type = v);
                        vm.touch(FIELD_ACCOUNT_TYPE);
                    })
                    error=vm.field_error(FIELD_ACCOUNT_TYPE)
                />
            </div>
            <CommentField vm=vm />
            <AttachmentField state=vm.attachment label="Comprobante o documento de soporte (opcional)" />
            <FormActions vm=vm on_saved=on_saved on_cancel=on_cancel />
        </div>
    }
}
