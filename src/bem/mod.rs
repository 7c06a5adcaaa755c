//! BEM class-name composition against a build-emitted style table.
//!
//! This module provides the core primitives:
//!
//! - [`StyleTable`]: the mapping from BEM keys to final class names,
//!   as emitted by the styling build step
//! - [`BemResolver`]: composes block/element/modifier keys and resolves
//!   them against the table
//! - [`TableLoadError`]: errors from loading a manifest file
//!
//! Resolution never fails: a key absent from the table contributes
//! nothing to the output rather than raising an error.

mod error;
mod resolver;
mod table;

pub use error::TableLoadError;
pub use resolver::BemResolver;
pub use table::StyleTable;
