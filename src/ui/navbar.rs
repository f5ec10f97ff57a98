//! Fixed top navigation for the home page

use leptos::prelude::*;

use crate::core::content::{BRAND, MOBILE_NAV_LINKS, NAV_LINKS};
use crate::core::palette::{self, FONT, alpha};
use crate::core::style;

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let dropdown_open = RwSignal::new(false);
    let mobile_open = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle = window_event_listener(scroll, move |_| {
            sync_scrolled(scrolled, window().scroll_y().unwrap_or(0.0));
        });

        on_cleanup(move || handle.remove());
    }

    view! {
        <nav style=move || style::navbar(scrolled.get())>
            <div style="max-width: 1200px; margin: 0 auto; display: flex; align-items: center; \
                        justify-content: space-between; height: 68px;">
                <a href="#hero" style="text-decoration: none;">
                    <span
                        class="neon-breathe"
                        style=format!(
                            "font-family: {FONT}; font-size: 24px; font-weight: 900; letter-spacing: 0.08em; color: {};",
                            palette::NEON,
                        )
                    >
                        {BRAND}
                    </span>
                </a>

                <div class="nav-desktop" style="display: flex; align-items: center; gap: 36px;">
                    <div
                        style="position: relative;"
                        on:mouseenter=move |_| dropdown_open.set(true)
                        on:mouseleave=move |_| dropdown_open.set(false)
                    >
                        <NavAnchor label="Products ▾" href="#" />
                        <Show when=move || dropdown_open.get()>
                            <ProductsDropdown />
                        </Show>
                    </div>

                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <NavAnchor label=link.label href=link.href /> })
                        .collect_view()}

                    <NavCta />
                </div>

                <button
                    class="nav-mobile-btn"
                    aria-label="Toggle menu"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                    style=format!(
                        "display: none; background: none; border: 1px solid {}; color: {}; font-size: 20px; \
                         cursor: pointer; padding: 6px 10px; font-family: {FONT};",
                        palette::BORDER,
                        palette::NEON,
                    )
                >
                    {move || if mobile_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || mobile_open.get()>
                <MobileMenu on_navigate=Callback::new(move |_| mobile_open.set(false)) />
            </Show>
        </nav>
    }
}

/// Mirror the window scroll offset into `scrolled`. Does nothing once the
/// signal has been disposed.
#[cfg(any(not(feature = "ssr"), test))]
fn sync_scrolled(scrolled: RwSignal<bool>, scroll_y: f64) {
    let now = style::is_scrolled(scroll_y);
    if scrolled.try_get_untracked().is_some_and(|was| was != now) {
        scrolled.try_set(now);
    }
}

#[component]
fn NavAnchor(label: &'static str, href: &'static str) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <a
            href=href
            style=move || style::nav_link(hovered.get())
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {label}
        </a>
    }
}

#[component]
fn NavCta() -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <a
            href="#start"
            class="nav-cta"
            style=move || style::nav_cta(hovered.get())
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            "Start a project"
        </a>
    }
}

#[component]
fn ProductsDropdown() -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <div style=format!(
            "position: absolute; top: 100%; left: -16px; margin-top: 12px; background: {}; \
             border: 1px solid {}; border-radius: 4px; padding: 6px; min-width: 220px; \
             box-shadow: 0 0 30px {}, 0 20px 60px rgba(0,0,0,0.7);",
            palette::SURFACE,
            palette::BORDER,
            alpha(palette::NEON, "11"),
        )>
            <a
                href="#fleetpro"
                style=move || style::dropdown_item(hovered.get())
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
            >
                <div style=format!(
                    "color: {}; font-size: 14px; font-weight: 600; font-family: {FONT}; letter-spacing: 0.05em;",
                    palette::NEON_HOT,
                )>"FLEET PRO"</div>
                <div style=format!(
                    "color: {}; font-size: 11px; margin-top: 3px; font-family: {FONT}; letter-spacing: 0.04em;",
                    palette::GRAY,
                )>"Fleet Management SaaS"</div>
            </a>
        </div>
    }
}

#[component]
fn MobileMenu(#[prop(into)] on_navigate: Callback<()>) -> impl IntoView {
    let link_style = format!(
        "display: block; padding: 14px 0; color: {}; text-decoration: none; font-size: 14px; \
         font-family: {FONT}; letter-spacing: 0.1em; text-transform: uppercase; border-bottom: 1px solid {};",
        palette::GRAY_LIGHT,
        palette::BORDER,
    );

    view! {
        <div
            class="nav-mobile-menu"
            style=format!(
                "background: {}; padding: 1rem 2rem 2rem; border-top: 1px solid {};",
                palette::DEEP,
                palette::BORDER,
            )
        >
            {MOBILE_NAV_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a href=link.href style=link_style.clone() on:click=move |_| on_navigate.run(())>
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
            <a
                href="#start"
                on:click=move |_| on_navigate.run(())
                style=format!(
                    "display: inline-block; margin-top: 20px; color: {neon}; padding: 10px 24px; \
                     border: 1px solid {}; font-weight: 700; text-decoration: none; font-family: {FONT}; \
                     font-size: 12px; letter-spacing: 0.1em; text-transform: uppercase;",
                    alpha(palette::NEON, "66"),
                    neon = palette::NEON,
                )
            >
                "Start a project"
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_sync_follows_threshold() {
        let owner = Owner::new();
        owner.set();
        let scrolled = RwSignal::new(false);

        sync_scrolled(scrolled, 120.0);
        assert!(scrolled.get_untracked());

        sync_scrolled(scrolled, 0.0);
        assert!(!scrolled.get_untracked());
    }

    #[test]
    fn test_scroll_after_unmount_is_ignored() {
        let owner = Owner::new();
        owner.set();
        let scrolled = RwSignal::new(false);

        owner.cleanup();
        sync_scrolled(scrolled, 500.0);

        assert_eq!(scrolled.try_get_untracked(), None);
    }
}
