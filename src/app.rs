use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Style, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::config::{CONTACT_ENDPOINT_META, SiteConfig};
use crate::ui::{FleetProPage, HomePage, NotFoundPage};

/// Route paths
pub mod routes {
    pub const HOME: &str = "/";
    pub const FLEET_PRO: &str = "/fleetpro";

    /// Path segment matched by the router for [`FLEET_PRO`]
    pub const FLEET_PRO_SEGMENT: &str = "fleetpro";
}

/// Fonts, resets, scrollbar and the keyframes referenced by inline styles.
/// Media queries live here because inline styles cannot express them.
const GLOBAL_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Sora:wght@400;500;600;700;800;900&display=swap');
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; scroll-padding-top: 80px; }
body { background: #0B1120; overflow-x: hidden; }
::-webkit-scrollbar { width: 4px; }
::-webkit-scrollbar-track { background: #0B1120; }
::-webkit-scrollbar-thumb { background: #1A2744; }
::-webkit-scrollbar-thumb:hover { background: #57E6E644; }

@keyframes neonBreathe {
  0%, 100% { text-shadow: 0 0 20px rgba(87, 230, 230, 0.6), 0 0 40px rgba(63, 208, 212, 0.4); }
  50% { text-shadow: 0 0 10px rgba(87, 230, 230, 0.3), 0 0 20px rgba(63, 208, 212, 0.2); }
}
@keyframes heroGlow {
  0%, 100% {
    filter: drop-shadow(0 0 12px rgba(87, 230, 230, 0.4))
            drop-shadow(0 0 30px rgba(87, 230, 230, 0.2))
            drop-shadow(0 0 60px rgba(63, 208, 212, 0.1));
  }
  50% {
    filter: drop-shadow(0 0 18px rgba(87, 230, 230, 0.5))
            drop-shadow(0 0 40px rgba(87, 230, 230, 0.3))
            drop-shadow(0 0 80px rgba(63, 208, 212, 0.15));
  }
}
@keyframes dotPulse {
  0%, 100% { opacity: 1; box-shadow: 0 0 6px #57E6E6, 0 0 12px rgba(87, 230, 230, 0.6); }
  50% { opacity: 0.3; box-shadow: 0 0 2px rgba(87, 230, 230, 0.4); }
}
@keyframes fpOrbFloat {
  0%, 100% { transform: translateY(0) scale(1); }
  50% { transform: translateY(-28px) scale(1.04); }
}
@keyframes fpDotPulse {
  0%, 100% { opacity: 1; box-shadow: 0 0 6px #57E6E6, 0 0 12px rgba(87, 230, 230, 0.6); }
  50% { opacity: 0.3; box-shadow: 0 0 2px rgba(87, 230, 230, 0.4); }
}
@keyframes fpIconGlow {
  0%, 100% { filter: drop-shadow(0 0 14px rgba(87, 230, 230, 0.5)) drop-shadow(0 0 28px rgba(87, 230, 230, 0.25)); }
  50% { filter: drop-shadow(0 0 22px rgba(87, 230, 230, 0.7)) drop-shadow(0 0 44px rgba(87, 230, 230, 0.4)); }
}

.neon-breathe { animation: neonBreathe 3s ease-in-out infinite; }
.hero-title-glow { animation: heroGlow 4s ease-in-out infinite; }
.neon-breathe-inline { color: #57E6E6; animation: neonBreathe 3s ease-in-out infinite; }
.dot-pulse { animation: dotPulse 2s ease-in-out infinite; }

@media (max-width: 768px) {
  .nav-desktop { display: none !important; }
  .nav-mobile-btn { display: block !important; }
}
@media (min-width: 769px) {
  .nav-mobile-menu { display: none !important; }
}
@media (max-width: 640px) {
  .contact-row { grid-template-columns: 1fr !important; }
}
"#;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Configuration for this render: the server prefers what `main` provided,
/// the browser reads back the meta tag the server wrote.
fn load_config() -> SiteConfig {
    #[cfg(feature = "ssr")]
    {
        use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_env)
    }
    #[cfg(not(feature = "ssr"))]
    {
        SiteConfig::from_document()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = load_config();
    let endpoint = config.contact_endpoint.clone();
    provide_context(config);

    view! {
        <Style id="brdg-global">{GLOBAL_CSS}</Style>
        <Meta name=CONTACT_ENDPOINT_META content=endpoint />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=StaticSegment("") view=HomePage />
                <Route path=StaticSegment(routes::FLEET_PRO_SEGMENT) view=FleetProPage />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(routes::HOME, "/");
        assert!(!routes::FLEET_PRO.ends_with('/'));
        assert_eq!(
            routes::FLEET_PRO,
            format!("/{}", routes::FLEET_PRO_SEGMENT)
        );
    }

    #[test]
    fn test_global_css_defines_referenced_animations() {
        for name in [
            "neonBreathe",
            "heroGlow",
            "dotPulse",
            "fpOrbFloat",
            "fpDotPulse",
            "fpIconGlow",
        ] {
            assert!(
                GLOBAL_CSS.contains(&format!("@keyframes {name}")),
                "missing keyframes {name}"
            );
        }
    }

    #[test]
    fn test_global_css_hides_mobile_menu_on_desktop() {
        assert!(GLOBAL_CSS.contains(".nav-mobile-menu { display: none !important; }"));
    }
}
