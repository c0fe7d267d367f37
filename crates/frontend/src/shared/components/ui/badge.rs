use leptos::prelude::*;

/// Pill with a palette color ("blue", "green", "purple", "sky", "gray", ...).
#[component]
pub fn Badge(
    #[prop(into)]
    color: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || badge_class(&color.get())>{children()}</span>
    }
}

pub fn badge_class(color: &str) -> String {
    let color = if color.is_empty() { "gray" } else { color };
    format!("badge badge--{color}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class("sky"), "badge badge--sky");
        assert_eq!(badge_class(""), "badge badge--gray");
    }
}
