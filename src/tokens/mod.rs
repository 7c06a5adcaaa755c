//! Design tokens consumed by the styling pipeline.
//!
//! The storefront's visual scale lives here as typed constants: the
//! responsive typography scale, the two font families, and the text
//! colors. [`crate::PipelineConfig::theme_extension`] serializes them
//! into the shape the utility-CSS build expects.

mod typography;

pub use typography::{font_size_scale, Breakpoint, TextRole, TextStyle};

/// Primary text color.
pub const TEXT_PRIMARY: &str = "#000000";

/// Secondary (muted) text color.
pub const TEXT_SECONDARY: &str = "#848A9A";

/// A font family token with its CSS fallback stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Alegreya,
    Roboto,
}

impl FontFamily {
    /// Both families, in declaration order.
    pub const ALL: [FontFamily; 2] = [FontFamily::Alegreya, FontFamily::Roboto];

    /// Token name used in class suffixes and the theme map.
    pub fn token(self) -> &'static str {
        match self {
            FontFamily::Alegreya => "alegreya",
            FontFamily::Roboto => "roboto",
        }
    }

    /// The CSS font stack.
    pub fn stack(self) -> &'static [&'static str] {
        match self {
            FontFamily::Alegreya => &["Alegreya", "serif"],
            FontFamily::Roboto => &["Roboto", "sans-serif"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_family_tokens() {
        assert_eq!(FontFamily::Alegreya.token(), "alegreya");
        assert_eq!(FontFamily::Roboto.stack(), &["Roboto", "sans-serif"]);
    }

    #[test]
    fn test_colors() {
        assert_eq!(TEXT_PRIMARY, "#000000");
        assert_eq!(TEXT_SECONDARY, "#848A9A");
    }
}
