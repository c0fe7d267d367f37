//! Pieces every modality form renders.

use super::view_model::{AdvanceFormVm, AttachmentState};
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_advance_request::aggregate::AdvanceRequestDto;
use contracts::domain::a001_advance_request::attachment::{format_file_size, ACCEPT_ATTRIBUTE};
use contracts::domain::a001_advance_request::forms::{AdvanceForm, FIELD_AMOUNT, FIELD_COMMENT};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};

#[component]
pub fn AmountField<F: AdvanceForm>(vm: AdvanceFormVm<F>) -> impl IntoView {
    view! {
        <Input
            label="Monto (Q)"
            input_type="number"
            step="0.01"
            placeholder="0.00"
            value=Signal::derive(move || vm.form.with(|f| f.common().amount.clone()))
            on_input=Callback::new(move |v: String| vm.update(|f| f.common_mut().amount = v))
            on_blur=Callback::new(move |_| vm.touch(FIELD_AMOUNT))
            error=vm.field_error(FIELD_AMOUNT)
        />
    }
}

#[component]
pub fn CommentField<F: AdvanceForm>(vm: AdvanceFormVm<F>) -> impl IntoView {
    view! {
        <Textarea
            label="Comentario"
            placeholder="Motivo del anticipo"
            value=Signal::derive(move || vm.form.with(|f| f.common().comment.clone()))
            on_input=Callback::new(move |v: String| vm.update(|f| f.common_mut().comment = v))
            on_blur=Callback::new(move |_| vm.touch(FIELD_COMMENT))
            error=vm.field_error(FIELD_COMMENT)
        />
    }
}

/// Cancel / save buttons. Save is disabled while a submission is in flight.
#[component]
pub fn FormActions<F: AdvanceForm>(
    vm: AdvanceFormVm<F>,
    on_saved: Callback<AdvanceRequestDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="advance-form__actions">
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || vm.is_saving())
                on_click=move |_| on_cancel.run(())
            >
                "Cancelar"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || vm.is_saving())
                on_click=move |_| vm.submit(on_saved, on_cancel)
            >
                <Show when=move || vm.is_saving() fallback=move || {
                    if vm.is_editing() { "Actualizar" } else { "Guardar" }
                }>
                    <Spinner />
                    " Guardando..."
                </Show>
            </Button>
        </div>
    }
}

/// File picker with the chip of the selected document.
#[component]
pub fn AttachmentField(
    state: AttachmentState,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let on_change = move |_: leptos::ev::Event| {
        let file = state
            .input_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        state.select(file);
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                node_ref=state.input_ref
                type="file"
                class="form__file"
                accept=ACCEPT_ATTRIBUTE
                on:change=on_change
            />
            <small class="form__hint">"PDF, JPG o PNG. Máximo 5MB."</small>
            {move || state.file.get().map(|file| {
                let size = format_file_size(file.size());
                view! {
                    <div class="file-chip">
                        {icon("file")}
                        <span class="file-chip__name">{file.name()}</span>
                        <span class="file-chip__size">{size}</span>
                        <button
                            type="button"
                            class="file-chip__remove"
                            title="Quitar archivo"
                            on:click=move |_| state.remove()
                        >
                            {icon("close")}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
