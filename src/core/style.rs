//! Inline style derivations
//!
//! Every hover, scroll, open and reveal effect on the site is a pure function
//! from a few boolean flags (or the submission phase) to an inline style
//! string. Components hold the flags in signals and re-derive styles; nothing
//! mutates element styles directly.

use super::palette::{self, EASE_OUT_EXPO, FONT, alpha};
use super::submission::SubmissionPhase;

/// Scroll offset past which the navbar switches to its solid background
pub const SCROLL_THRESHOLD_PX: f64 = 40.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Direction a hidden element is offset from its resting position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slide {
    /// Starts below and rises
    Up(u32),
    /// Starts to the left and slides right
    FromLeft(u32),
    /// Starts to the right and slides left
    FromRight(u32),
}

impl Slide {
    fn hidden_transform(&self) -> String {
        match self {
            Slide::Up(px) => format!("translateY({px}px)"),
            Slide::FromLeft(px) => format!("translateX(-{px}px)"),
            Slide::FromRight(px) => format!("translateX({px}px)"),
        }
    }

    fn resting_transform(&self) -> &'static str {
        match self {
            Slide::Up(_) => "translateY(0)",
            Slide::FromLeft(_) | Slide::FromRight(_) => "translateX(0)",
        }
    }
}

/// Timing of a reveal transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub slide: Slide,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Reveal {
    pub const fn up(px: u32, duration_ms: u32) -> Self {
        Self {
            slide: Slide::Up(px),
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn slide(slide: Slide, duration_ms: u32) -> Self {
        Self {
            slide,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Opacity, transform and transition for the given visibility
    pub fn style(&self, visible: bool) -> String {
        let (opacity, transform) = if visible {
            (1, self.slide.resting_transform().to_string())
        } else {
            (0, self.slide.hidden_transform())
        };
        format!(
            "opacity: {opacity}; transform: {transform}; transition: all {}ms {EASE_OUT_EXPO} {}ms;",
            self.duration_ms, self.delay_ms
        )
    }
}

/// Fixed navbar; transparent over the hero, blurred once scrolled
pub fn navbar(scrolled: bool) -> String {
    let (background, backdrop, border) = if scrolled {
        (
            "rgba(4,11,20,0.88)",
            "blur(20px) saturate(1.4)",
            palette::BORDER_GLOW,
        )
    } else {
        ("transparent", "none", "transparent")
    };
    format!(
        "position: fixed; top: 0; left: 0; right: 0; z-index: 100; background: {background}; \
         backdrop-filter: {backdrop}; border-bottom: 1px solid {border}; \
         transition: all 0.5s ease; padding: 0 clamp(1.5rem, 5vw, 4rem);"
    )
}

pub fn nav_link(hovered: bool) -> String {
    let (color, shadow) = if hovered {
        (palette::NEON.to_string(), format!("0 0 12px {}", palette::NEON_GLOW))
    } else {
        (palette::GRAY_LIGHT.to_string(), "none".to_string())
    };
    format!(
        "color: {color}; text-shadow: {shadow}; text-decoration: none; font-size: 13px; \
         font-family: {FONT}; letter-spacing: 0.12em; text-transform: uppercase; font-weight: 500; \
         transition: color 0.3s, text-shadow 0.3s; cursor: pointer;"
    )
}

/// Entry in the Products dropdown
pub fn dropdown_item(hovered: bool) -> String {
    let (background, edge) = if hovered {
        (alpha(palette::NEON, "08"), palette::NEON)
    } else {
        ("transparent".to_string(), "transparent")
    };
    format!(
        "display: block; padding: 12px 16px; border-radius: 3px; text-decoration: none; \
         background: {background}; border-left: 2px solid {edge}; transition: all 0.2s;"
    )
}

/// Ghost call-to-action in the navbar
pub fn nav_cta(hovered: bool) -> String {
    let (background, border, shadow) = if hovered {
        (
            alpha(palette::NEON, "15"),
            palette::NEON.to_string(),
            "0 0 15px rgba(87, 230, 230, 0.5), 0 0 35px rgba(87, 230, 230, 0.25)",
        )
    } else {
        (
            "transparent".to_string(),
            alpha(palette::NEON, "66"),
            "0 0 10px rgba(87, 230, 230, 0.3), 0 0 25px rgba(87, 230, 230, 0.15)",
        )
    };
    format!(
        "background: {background}; color: {neon}; padding: 8px 24px; border: 1px solid {border}; \
         border-radius: 2px; font-size: 12px; font-weight: 700; text-decoration: none; \
         font-family: {FONT}; letter-spacing: 0.1em; text-transform: uppercase; \
         box-shadow: {shadow}; transition: all 0.3s ease;",
        neon = palette::NEON
    )
}

/// Gradient call-to-action that lifts on hover
pub fn primary_button(hovered: bool) -> String {
    let (shadow, lift) = if hovered {
        (
            "0 0 20px rgba(87, 230, 230, 0.6), 0 0 50px rgba(87, 230, 230, 0.3), 0 0 100px rgba(63, 208, 212, 0.15)",
            "translateY(-2px)",
        )
    } else {
        (
            "0 0 15px rgba(87, 230, 230, 0.4), 0 0 40px rgba(87, 230, 230, 0.2), 0 0 80px rgba(63, 208, 212, 0.1)",
            "translateY(0)",
        )
    };
    format!(
        "background: linear-gradient(135deg, {neon} 0%, {dim} 100%); color: {void}; \
         padding: 14px 36px; border: none; font-size: 13px; font-weight: 700; text-decoration: none; \
         font-family: {FONT}; letter-spacing: 0.08em; text-transform: uppercase; \
         box-shadow: {shadow}; transform: {lift}; transition: all 0.3s ease; border-radius: 4px;",
        neon = palette::NEON,
        dim = palette::NEON_DIM,
        void = palette::VOID,
    )
}

/// Neon-to-blue call to action on the product page
pub fn product_button(hovered: bool) -> String {
    let (shadow, lift) = if hovered {
        (format!("0 8px 30px {}", alpha(palette::NEON, "55")), "translateY(-2px)")
    } else {
        (format!("0 0 20px {}", alpha(palette::NEON, "44")), "translateY(0)")
    };
    format!(
        "background: linear-gradient(135deg, {neon} 0%, {blue} 100%); color: {void}; \
         padding: 14px 36px; font-size: 13px; font-weight: 700; text-decoration: none; \
         font-family: {FONT}; letter-spacing: 0.08em; text-transform: uppercase; border-radius: 4px; \
         box-shadow: {shadow}; transform: {lift}; transition: all 0.3s ease;",
        neon = palette::NEON,
        blue = palette::ACCENT_BLUE,
        void = palette::VOID,
    )
}

/// Transparent outlined button
pub fn outline_button(hovered: bool) -> String {
    let (border, background) = if hovered {
        ("rgba(255,255,255,0.4)", "rgba(255,255,255,0.05)")
    } else {
        ("rgba(255,255,255,0.2)", "transparent")
    };
    format!(
        "color: {white}; padding: 14px 36px; font-size: 13px; text-decoration: none; \
         font-family: {FONT}; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; \
         border: 1px solid {border}; background: {background}; transition: all 0.3s ease; border-radius: 4px;",
        white = palette::WHITE
    )
}

/// Neon-outlined secondary link (demo request, back links)
pub fn neon_link(hovered: bool) -> String {
    let (border, shadow) = if hovered {
        (palette::NEON.to_string(), format!("0 0 20px {}", alpha(palette::NEON, "33")))
    } else {
        (alpha(palette::NEON, "44"), "none".to_string())
    };
    format!(
        "color: {neon}; padding: 12px 28px; border: 1px solid {border}; box-shadow: {shadow}; \
         font-size: 12px; font-weight: 700; text-decoration: none; font-family: {FONT}; \
         letter-spacing: 0.08em; text-transform: uppercase; transition: all 0.3s;",
        neon = palette::NEON
    )
}

/// Muted text link that lights up on hover
pub fn quiet_link(hovered: bool) -> String {
    let color = if hovered { palette::NEON } else { palette::GRAY };
    format!(
        "display: inline-flex; align-items: center; gap: 8px; color: {color}; text-decoration: none; \
         font-family: {FONT}; font-size: 11px; letter-spacing: 0.18em; text-transform: uppercase; \
         transition: color 0.3s;"
    )
}

/// Service / feature card on the home page
pub fn service_card(hovered: bool, visible: bool, delay_ms: u32) -> String {
    let (background, border, shadow) = if hovered {
        (
            alpha(palette::NEON, "06"),
            alpha(palette::NEON, "44"),
            format!(
                "0 0 30px {}, inset 0 0 30px {}",
                alpha(palette::NEON, "11"),
                alpha(palette::NEON, "05")
            ),
        )
    } else {
        (
            palette::SURFACE.to_string(),
            palette::BORDER.to_string(),
            "none".to_string(),
        )
    };
    format!(
        "background: {background}; border: 1px solid {border}; padding: 28px; position: relative; \
         overflow: hidden; box-shadow: {shadow}; {}",
        Reveal::up(30, 600).delayed(delay_ms).style(visible)
    )
}

/// Corner accent on cards: `top_left` picks the glowing pair
pub fn card_corner(hovered: bool, top_left: bool, horizontal: bool, size_px: u32) -> String {
    let color = if hovered { palette::NEON } else { palette::BORDER };
    let (width, height) = if horizontal { (size_px, 1) } else { (1, size_px) };
    let anchor = if top_left {
        "top: 0; left: 0;"
    } else {
        "bottom: 0; right: 0;"
    };
    let glow = if hovered && top_left {
        format!("0 0 8px {}", palette::NEON_GLOW)
    } else {
        "none".to_string()
    };
    format!(
        "position: absolute; {anchor} width: {width}px; height: {height}px; background: {color}; \
         box-shadow: {glow}; transition: background 0.3s;"
    )
}

/// Glyph icon inside a card
pub fn card_icon(hovered: bool, size_px: u32, rest_color: &str) -> String {
    let (color, shadow) = if hovered {
        (palette::NEON, format!("0 0 12px {}", palette::NEON_GLOW))
    } else {
        (rest_color, "none".to_string())
    };
    format!(
        "font-size: {size_px}px; color: {color}; text-shadow: {shadow}; transition: all 0.3s; flex-shrink: 0;"
    )
}

/// Single-line feature card on the product page
pub fn feature_card(hovered: bool, visible: bool, delay_ms: u32) -> String {
    let (background, border, shadow) = if hovered {
        (
            alpha(palette::NEON, "06"),
            alpha(palette::NEON, "44"),
            format!("0 0 20px {}", alpha(palette::NEON, "0F")),
        )
    } else {
        (
            palette::SURFACE.to_string(),
            palette::BORDER.to_string(),
            "none".to_string(),
        )
    };
    format!(
        "background: {background}; border: 1px solid {border}; padding: 20px 24px; display: flex; \
         gap: 16px; align-items: flex-start; position: relative; overflow: hidden; \
         box-shadow: {shadow}; {}",
        Reveal::up(20, 600).delayed(delay_ms).style(visible)
    )
}

/// Role card in the product page security section
pub fn role_card(hovered: bool, visible: bool, delay_ms: u32) -> String {
    let (background, border, shadow) = if hovered {
        (
            alpha(palette::NEON, "06"),
            alpha(palette::NEON, "55"),
            format!(
                "0 0 30px {}, inset 0 0 30px {}",
                alpha(palette::NEON, "15"),
                alpha(palette::NEON, "05")
            ),
        )
    } else {
        (
            palette::SURFACE.to_string(),
            palette::BORDER.to_string(),
            "none".to_string(),
        )
    };
    format!(
        "background: {background}; border: 1px solid {border}; padding: 32px 28px; flex: 1; \
         min-width: 220px; position: relative; overflow: hidden; box-shadow: {shadow}; {}",
        Reveal::up(20, 600).delayed(delay_ms).style(visible)
    )
}

/// Contact form input; lit while focused
pub fn form_input(focused: bool) -> String {
    let (border, shadow) = if focused {
        (palette::NEON.to_string(), format!("0 0 15px {}", alpha(palette::NEON, "22")))
    } else {
        (palette::BORDER.to_string(), "none".to_string())
    };
    format!(
        "width: 100%; padding: 14px 16px; background: {void}; border: 1px solid {border}; \
         box-shadow: {shadow}; color: {white}; font-size: 14px; font-family: {FONT}; \
         letter-spacing: 0.02em; outline: none; box-sizing: border-box; \
         transition: border-color 0.3s, box-shadow 0.3s;",
        void = palette::VOID,
        white = palette::WHITE,
    )
}

/// Contact form submit button for the current phase.
///
/// While sending the button is greyed out and ignores hover.
pub fn submit_button(phase: SubmissionPhase, hovered: bool) -> String {
    if phase.is_sending() {
        return format!(
            "width: 100%; background: {disabled}; color: {void}; padding: 14px 0; border: none; \
             font-size: 13px; font-weight: 700; cursor: not-allowed; font-family: {FONT}; \
             letter-spacing: 0.08em; text-transform: uppercase; box-shadow: none; \
             transition: all 0.3s; border-radius: 4px; opacity: 0.7;",
            disabled = palette::DISABLED,
            void = palette::VOID,
        );
    }
    format!(
        "width: 100%; cursor: pointer; opacity: 1; padding: 14px 0; {}",
        primary_button(hovered).replace("padding: 14px 36px; ", "")
    )
}

/// Label shown on the submit button
pub fn submit_label(phase: SubmissionPhase) -> &'static str {
    if phase.is_sending() {
        "Sending..."
    } else {
        "Start a project →"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(40.0));
        assert!(is_scrolled(40.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn test_navbar_switches_background_when_scrolled() {
        assert!(navbar(false).contains("background: transparent"));
        assert!(navbar(false).contains("backdrop-filter: none"));
        assert!(navbar(true).contains("rgba(4,11,20,0.88)"));
        assert!(navbar(true).contains("blur(20px)"));
    }

    #[test]
    fn test_hidden_reveal_is_transparent_and_offset() {
        let style = Reveal::up(30, 800).style(false);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(30px)"));
        assert!(style.contains("800ms"));
    }

    #[test]
    fn test_visible_reveal_rests_in_place() {
        let style = Reveal::up(30, 800).style(true);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0)"));
    }

    #[test]
    fn test_horizontal_slides() {
        let left = Reveal::slide(Slide::FromLeft(30), 800).style(false);
        let right = Reveal::slide(Slide::FromRight(30), 800).style(false);
        assert!(left.contains("translateX(-30px)"));
        assert!(right.contains("translateX(30px)"));
        assert!(Reveal::slide(Slide::FromLeft(30), 800).style(true).contains("translateX(0)"));
    }

    #[test]
    fn test_reveal_delay_is_rendered() {
        let style = Reveal::up(30, 600).delayed(240).style(false);
        assert!(style.ends_with("240ms;"));
    }

    #[test]
    fn test_service_card_hover_lights_border() {
        assert!(service_card(true, true, 0).contains("#57E6E644"));
        assert!(service_card(false, true, 0).contains(palette::BORDER));
        assert!(service_card(false, false, 80).contains("opacity: 0"));
    }

    #[test]
    fn test_card_corner_glow_only_top_left_when_hovered() {
        assert!(card_corner(true, true, true, 20).contains("0 0 8px"));
        assert!(card_corner(true, false, true, 20).contains("box-shadow: none"));
        assert!(card_corner(false, true, true, 20).contains("box-shadow: none"));
        assert!(card_corner(false, true, false, 20).contains("width: 1px; height: 20px"));
    }

    #[test]
    fn test_submit_button_disabled_only_while_sending() {
        let sending = submit_button(SubmissionPhase::Sending, true);
        assert!(sending.contains("cursor: not-allowed"));
        assert!(sending.contains("opacity: 0.7"));
        assert!(!sending.contains("translateY(-2px)"));

        for phase in [
            SubmissionPhase::Idle,
            SubmissionPhase::Error,
            SubmissionPhase::Success,
        ] {
            let style = submit_button(phase, false);
            assert!(style.contains("cursor: pointer"));
            assert!(style.contains("linear-gradient"));
        }
        assert!(submit_button(SubmissionPhase::Idle, true).contains("translateY(-2px)"));
    }

    #[test]
    fn test_submit_label_follows_phase() {
        assert_eq!(submit_label(SubmissionPhase::Sending), "Sending...");
        assert_eq!(submit_label(SubmissionPhase::Idle), "Start a project →");
        assert_eq!(submit_label(SubmissionPhase::Error), "Start a project →");
    }

    #[test]
    fn test_form_input_focus() {
        assert!(form_input(true).contains(&format!("border: 1px solid {}", palette::NEON)));
        assert!(form_input(false).contains(&format!("border: 1px solid {}", palette::BORDER)));
    }

    #[test]
    fn test_nav_link_hover() {
        assert!(nav_link(true).contains(&format!("color: {}", palette::NEON)));
        assert!(nav_link(false).contains("text-shadow: none"));
    }

    #[test]
    fn test_product_button_lifts_on_hover() {
        assert!(product_button(true).contains("translateY(-2px)"));
        assert!(product_button(false).contains("translateY(0)"));
        assert!(product_button(false).contains(palette::ACCENT_BLUE));
    }
}
