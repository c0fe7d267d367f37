use leptos::prelude::*;

#[component]
pub fn FieldErrorText(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|e| view! { <p class="form__error">{e}</p> })
    }
}

/// Control class with the invalid modifier when `error` is set.
pub fn control_class(base: &str, has_error: bool) -> String {
    if has_error {
        format!("{base} {base}--invalid")
    } else {
        base.to_string()
    }
}
