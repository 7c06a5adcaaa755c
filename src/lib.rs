//! BEM class-name composition for build-tool-resolved stylesheets,
//! plus the data shapes and design tokens of a pizza storefront.
//!
//! The styling build compiles the storefront's stylesheets and emits a
//! manifest mapping BEM keys (`block`, `block__element`,
//! `block_modifier`, `block__element_modifier`) to final class names.
//! [`BemResolver`] binds a block to that manifest and computes the
//! class string for any element/modifier combination, silently
//! dropping keys the build didn't emit.
//!
//! # Example
//!
//! ```rust
//! use bemuse::{BemResolver, StyleTable};
//!
//! let table = StyleTable::from_json_str(
//!     r#"{
//!         "card": "c1",
//!         "card__title": "c2",
//!         "card__title_active": "c3",
//!         "card_disabled": "c4"
//!     }"#,
//! )
//! .unwrap();
//!
//! let bem = BemResolver::new("card", table);
//! assert_eq!(bem.classes(None, None), "c1");
//! assert_eq!(bem.classes(Some("title"), Some("active")), "c2 c3");
//! assert_eq!(bem.classes(None, Some("disabled")), "c4");
//! assert_eq!(bem.classes(Some("missing"), None), "");
//! ```
//!
//! The [`catalog`] module holds the product and cart shapes the
//! storefront serializes, [`tokens`] the design scale, and [`config`]
//! the configuration handed to the styling build.

pub mod bem;
pub mod catalog;
pub mod config;
pub mod tokens;

pub use bem::{BemResolver, StyleTable, TableLoadError};
pub use catalog::{CartItem, Product, ProductSize, ProductType};
pub use config::{PipelineConfig, ThemeExtension};
pub use tokens::{Breakpoint, FontFamily, TextRole, TextStyle};
