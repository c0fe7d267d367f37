use super::field_error::FieldErrorText;
use leptos::prelude::*;

/// Radio buttons over `(value, label)` pairs.
#[component]
pub fn RadioGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Shared `name` of the inputs
    #[prop(into)]
    name: String,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <div class="form__radio-group">
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let radio_id = format!("{}-{}", name, val.to_lowercase().replace(' ', "-"));
                        let current = val.clone();
                        let picked = val.clone();
                        view! {
                            <div class="form__radio-wrapper">
                                <input
                                    id=radio_id.clone()
                                    type="radio"
                                    class="form__radio"
                                    name=name.clone()
                                    value=val
                                    prop:checked=move || value.get() == current
                                    disabled=move || disabled.get()
                                    on:change=move |_| {
                                        if let Some(handler) = on_change {
                                            handler.run(picked.clone());
                                        }
                                    }
                                />
                                <label class="form__radio-label" for=radio_id>{text}</label>
                            </div>
                        }
                    }
                />
            </div>
            <FieldErrorText error=error />
        </div>
    }
}
