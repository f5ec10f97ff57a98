use leptos::prelude::*;

/// Anchor whose inline style is derived from its hover state
#[component]
pub fn HoverLink(
    href: &'static str,
    look: fn(bool) -> String,
    #[prop(optional)] extra_style: &'static str,
    children: Children,
) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <a
            href=href
            style=move || format!("{}{extra_style}", look(hovered.get()))
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {children()}
        </a>
    }
}
