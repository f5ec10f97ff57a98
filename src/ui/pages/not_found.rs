//! 404 page for unmatched routes

use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::routes;
use crate::core::content::BRAND;
use crate::core::palette::{self, FONT, alpha};
use crate::core::style;
use crate::ui::links::HoverLink;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        use axum::http::StatusCode;
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found | {BRAND}") />

        <div style=format!(
            "min-height: 100vh; background: {}; display: flex; flex-direction: column; \
             align-items: center; justify-content: center; padding: 1.5rem; text-align: center;",
            palette::VOID,
        )>
            <span style=format!(
                "font-family: {FONT}; font-size: clamp(4rem, 12vw, 7rem); font-weight: 900; color: {}; \
                 text-shadow: 0 0 30px {}; letter-spacing: 0.05em;",
                palette::NEON,
                alpha(palette::NEON, "55"),
            )>"404"</span>

            <h1 style=format!(
                "font-family: {FONT}; font-size: 1.4rem; font-weight: 700; color: {}; \
                 margin: 16px 0 8px; letter-spacing: 0.08em; text-transform: uppercase;",
                palette::WHITE,
            )>"Signal Lost"</h1>

            <p style=format!(
                "font-family: {FONT}; font-size: 15px; color: {}; max-width: 420px; line-height: 1.7; margin: 0 0 40px;",
                palette::GRAY,
            )>"The page you're looking for doesn't exist or has been moved."</p>

            <HoverLink href=routes::HOME look=style::outline_button>
                "Back to BRDG"
            </HoverLink>
        </div>
    }
}
