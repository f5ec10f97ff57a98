use chrono::Datelike;
use leptos::prelude::*;

use crate::core::content::{BRAND, LOCATION, TAGLINE};
use crate::core::palette::{self, FONT, alpha};

/// Year shown in copyright lines
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Home page footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer style=format!(
            "padding: 40px 1.5rem; background: {}; text-align: center; border-top: 1px solid {}; position: relative;",
            palette::VOID,
            palette::BORDER,
        )>
            <div style=format!(
                "position: absolute; top: 0; left: 0; right: 0; height: 1px; \
                 background: linear-gradient(90deg, transparent, {}, transparent);",
                alpha(palette::NEON, "15"),
            ) />
            <p style=format!(
                "color: {}; font-size: 12px; font-family: {FONT}; margin: 0; letter-spacing: 0.08em;",
                palette::GRAY,
            )>
                {format!("© {} {BRAND} — {}", current_year(), TAGLINE.to_uppercase())}
            </p>
            <p style=format!(
                "color: {}; font-size: 11px; font-family: {FONT}; margin: 6px 0 0; opacity: 0.5; letter-spacing: 0.1em;",
                palette::GRAY,
            )>{LOCATION.to_uppercase()}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2025);
    }
}
