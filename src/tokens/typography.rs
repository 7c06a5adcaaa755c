//! The responsive typography scale.
//!
//! Every text role carries one size per breakpoint. Token names in the
//! emitted theme follow the `{role}-{breakpoint}` convention the
//! stylesheet classes reference (`h1-desktop`, `p-mobile`, ...).

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::ser::{Serialize, SerializeMap, SerializeTuple, Serializer};

/// Viewport tier a text size applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    /// All breakpoints, widest first.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    /// Suffix used in token names.
    pub fn suffix(self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }
}

/// Semantic text role in the storefront's type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    H1,
    H2,
    H3,
    H4,
    Accent,
    Body,
    Description,
}

impl TextRole {
    /// All roles, largest first.
    pub const ALL: [TextRole; 7] = [
        TextRole::H1,
        TextRole::H2,
        TextRole::H3,
        TextRole::H4,
        TextRole::Accent,
        TextRole::Body,
        TextRole::Description,
    ];

    /// Slug used in token names (`Body` is `p`, matching the stylesheet).
    pub fn slug(self) -> &'static str {
        match self {
            TextRole::H1 => "h1",
            TextRole::H2 => "h2",
            TextRole::H3 => "h3",
            TextRole::H4 => "h4",
            TextRole::Accent => "accent",
            TextRole::Body => "p",
            TextRole::Description => "description",
        }
    }

    /// The size and line height for this role at a breakpoint.
    pub fn style(self, breakpoint: Breakpoint) -> TextStyle {
        use Breakpoint::*;
        use TextRole::*;
        let (size_px, line_height_px) = match (self, breakpoint) {
            (H1, Desktop) => (72, 90),
            (H2, Desktop) => (52, 65),
            (H3, Desktop) => (32, 40),
            (H4, Desktop) => (24, 30),
            (Accent, Desktop) => (24, 36),
            (Body, Desktop) => (14, 21),
            (Description, Desktop) => (12, 18),

            (H1, Tablet) => (52, 65),
            (H2, Tablet) => (40, 60),
            (H3, Tablet) => (24, 30),
            (H4, Tablet) => (20, 27),
            (Accent, Tablet) => (18, 27),
            (Body, Tablet) => (14, 21),
            (Description, Tablet) => (12, 18),

            (H1, Mobile) => (40, 50),
            (H2, Mobile) => (28, 35),
            (H3, Mobile) => (20, 25),
            (H4, Mobile) => (18, 24),
            (Accent, Mobile) => (16, 24),
            (Body, Mobile) => (12, 18),
            (Description, Mobile) => (11, 17),
        };
        TextStyle {
            size_px,
            line_height_px,
        }
    }

    /// Token name for this role at a breakpoint, e.g. `"h1-desktop"`.
    pub fn token(self, breakpoint: Breakpoint) -> String {
        format!("{}-{}", self.slug(), breakpoint.suffix())
    }
}

/// A font size paired with its line height, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub size_px: u16,
    pub line_height_px: u16,
}

// The theme file expects ["72px", {"lineHeight": "90px"}] per entry,
// so serialization is by hand rather than derived.
impl Serialize for TextStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct LineHeight(u16);

        impl Serialize for LineHeight {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("lineHeight", &format!("{}px", self.0))?;
                map.end()
            }
        }

        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&format!("{}px", self.size_px))?;
        tuple.serialize_element(&LineHeight(self.line_height_px))?;
        tuple.end()
    }
}

static FONT_SIZE_SCALE: Lazy<BTreeMap<String, TextStyle>> = Lazy::new(|| {
    let mut scale = BTreeMap::new();
    for role in TextRole::ALL {
        for breakpoint in Breakpoint::ALL {
            scale.insert(role.token(breakpoint), role.style(breakpoint));
        }
    }
    scale
});

/// The full token→style map, all roles at all breakpoints.
pub fn font_size_scale() -> &'static BTreeMap<String, TextStyle> {
    &FONT_SIZE_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_h1() {
        let style = TextRole::H1.style(Breakpoint::Desktop);
        assert_eq!(style.size_px, 72);
        assert_eq!(style.line_height_px, 90);
    }

    #[test]
    fn test_mobile_description_is_smallest() {
        let style = TextRole::Description.style(Breakpoint::Mobile);
        assert_eq!(style.size_px, 11);
        assert_eq!(style.line_height_px, 17);
    }

    #[test]
    fn test_sizes_shrink_with_breakpoint() {
        for role in TextRole::ALL {
            let desktop = role.style(Breakpoint::Desktop);
            let tablet = role.style(Breakpoint::Tablet);
            let mobile = role.style(Breakpoint::Mobile);
            assert!(desktop.size_px >= tablet.size_px, "{:?}", role);
            assert!(tablet.size_px >= mobile.size_px, "{:?}", role);
        }
    }

    #[test]
    fn test_token_names() {
        assert_eq!(TextRole::H1.token(Breakpoint::Desktop), "h1-desktop");
        assert_eq!(TextRole::Body.token(Breakpoint::Mobile), "p-mobile");
    }

    #[test]
    fn test_scale_has_all_combinations() {
        let scale = font_size_scale();
        assert_eq!(scale.len(), 21);
        assert!(scale.contains_key("accent-tablet"));
        assert!(scale.contains_key("description-mobile"));
    }

    #[test]
    fn test_text_style_serialized_shape() {
        let style = TextRole::H1.style(Breakpoint::Desktop);
        let json = serde_json::to_value(style).unwrap();
        assert_eq!(json[0], "72px");
        assert_eq!(json[1]["lineHeight"], "90px");
    }
}
