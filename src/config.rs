//! Styling pipeline configuration.
//!
//! The utility-CSS build scans source files for class usage, compiles
//! the SCSS entry with a shared prelude, and emits the style manifest
//! the [`crate::bem`] module resolves against. This module declares
//! that configuration as data; it does not run the build.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tokens::{font_size_scale, FontFamily, TextStyle, TEXT_PRIMARY, TEXT_SECONDARY};

/// Configuration handed to the external styling build.
///
/// `Default` reproduces the storefront's own setup: the content globs
/// the class scanner walks, the SCSS entry point, the prelude partials
/// injected into every stylesheet, and the enabled build modules.
///
/// # Example
///
/// ```rust
/// use bemuse::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert!(config.content.iter().any(|g| g.ends_with("*.scss")));
///
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// assert!(json.contains("stylesheetEntry"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Globs the class scanner walks for used class names.
    pub content: Vec<String>,
    /// The stylesheet the build compiles.
    pub stylesheet_entry: String,
    /// Partials prepended to every compiled stylesheet.
    pub scss_prelude: Vec<String>,
    /// Build modules to enable.
    pub modules: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            content: vec![
                "./components/**/*.{js,vue,ts}".to_string(),
                "./layouts/**/*.vue".to_string(),
                "./pages/**/*.vue".to_string(),
                "./plugins/**/*.{js,ts}".to_string(),
                "./app.vue".to_string(),
                "./error.vue".to_string(),
                "./assets/scss/**/*.scss".to_string(),
            ],
            stylesheet_entry: "~/assets/scss/main.scss".to_string(),
            scss_prelude: vec![
                "~/assets/scss/_fonts.scss".to_string(),
                "~/assets/scss/_typography.scss".to_string(),
            ],
            modules: vec!["@nuxt/image".to_string()],
        }
    }
}

impl PipelineConfig {
    /// Builds the theme extension block from the design tokens.
    ///
    /// This is the font-family, font-size, and color section of the
    /// utility-CSS theme, in the exact shape its config file expects.
    pub fn theme_extension(&self) -> ThemeExtension {
        let font_family = FontFamily::ALL
            .iter()
            .map(|f| {
                let stack = f.stack().iter().map(|s| s.to_string()).collect();
                (f.token().to_string(), stack)
            })
            .collect();

        let mut colors = BTreeMap::new();
        colors.insert("text-primary".to_string(), TEXT_PRIMARY.to_string());
        colors.insert("text-secondary".to_string(), TEXT_SECONDARY.to_string());

        ThemeExtension {
            font_family,
            font_size: font_size_scale(),
            colors,
        }
    }
}

/// The `theme.extend` section emitted for the utility-CSS build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
    pub font_family: BTreeMap<String, Vec<String>>,
    pub font_size: &'static BTreeMap<String, TextStyle>,
    pub colors: BTreeMap<String, String>,
}
