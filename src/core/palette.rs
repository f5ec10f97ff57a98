//! Colour tokens and shared type settings for the site

pub const NEON: &str = "#57E6E6";
pub const NEON_DIM: &str = "#3FD0D4";
pub const NEON_GLOW: &str = "#57E6E666";
pub const NEON_HOT: &str = "#6AEAEA";
pub const VOID: &str = "#0B1120";
pub const DEEP: &str = "#070C18";
pub const SURFACE: &str = "#0F1729";
pub const BORDER: &str = "#1A2744";
pub const BORDER_GLOW: &str = "#57E6E622";
pub const WHITE: &str = "#E6EDF3";
pub const GRAY: &str = "#9CA3AF";
pub const GRAY_LIGHT: &str = "#E6EDF3";
pub const ERROR: &str = "#ff6b6b";
pub const DISABLED: &str = "#4a5568";
pub const ACCENT_BLUE: &str = "#3B82F6";

/// [`NEON`] as an `r, g, b` triple for `rgba()` strokes on the canvas
pub const NEON_RGB: &str = "87, 230, 230";

pub const FONT: &str = "'Sora', sans-serif";

/// Easing used by every reveal transition
pub const EASE_OUT_EXPO: &str = "cubic-bezier(0.16, 1, 0.32, 1)";

/// Append a two-digit hex alpha to a `#RRGGBB` token
pub fn alpha(color: &str, alpha_hex: &str) -> String {
    format!("{color}{alpha_hex}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_appends_hex_suffix() {
        assert_eq!(alpha(NEON, "44"), "#57E6E644");
        assert_eq!(alpha(BORDER, "08"), "#1A274408");
    }
}
