//! Block-bound class-name resolution.

use super::table::StyleTable;

/// A class-name resolver bound to one BEM block and one style table.
///
/// The resolver composes lookup keys from the block name plus an
/// optional element and modifier, resolves each key against the table,
/// and space-joins whatever resolved. Keys that miss the table are
/// silently dropped, so the result never carries stray whitespace and
/// degrades to `""` when nothing matches.
///
/// Key composition:
///
/// | element | modifier | keys looked up                              |
/// |---------|----------|---------------------------------------------|
/// | no      | no       | `block`                                     |
/// | yes     | no       | `block__element`                            |
/// | no      | yes      | `block_modifier`                            |
/// | yes     | yes      | `block__element` and `block__element_modifier` |
///
/// The element+modifier case intentionally resolves two keys so a base
/// element class composes with a separate state class; it is never
/// collapsed into a single compound lookup.
///
/// # Example
///
/// ```rust
/// use bemuse::{BemResolver, StyleTable};
///
/// let table = StyleTable::new()
///     .add("card", "c1")
///     .add("card__title", "c2")
///     .add("card__title_active", "c3");
/// let bem = BemResolver::new("card", table);
///
/// assert_eq!(bem.classes(None, None), "c1");
/// assert_eq!(bem.classes(Some("title"), Some("active")), "c2 c3");
/// ```
#[derive(Debug, Clone)]
pub struct BemResolver {
    block: String,
    table: StyleTable,
}

impl BemResolver {
    /// Binds a block name to a style table.
    ///
    /// No validation is performed; any block name is accepted, including
    /// the empty string.
    pub fn new(block: impl Into<String>, table: StyleTable) -> Self {
        Self {
            block: block.into(),
            table,
        }
    }

    /// Returns the block name this resolver is bound to.
    pub fn block(&self) -> &str {
        &self.block
    }

    /// Returns the underlying style table.
    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    /// Resolves the class names for an optional element and modifier.
    ///
    /// `None` and `Some("")` both mean "absent". The result contains the
    /// resolved class names space-separated, with no leading, trailing,
    /// or doubled spaces; it is `""` when no key matched the table.
    pub fn classes(&self, element: Option<&str>, modifier: Option<&str>) -> String {
        let element = element.filter(|e| !e.is_empty());
        let modifier = modifier.filter(|m| !m.is_empty());

        let key = match (element, modifier) {
            (Some(e), Some(m)) => {
                format!("{0}__{1} {0}__{1}_{2}", self.block, e, m)
            }
            (Some(e), None) => format!("{}__{}", self.block, e),
            (None, Some(m)) => format!("{}_{}", self.block, m),
            (None, None) => self.block.clone(),
        };

        // The composed key may hold several space-separated sub-keys;
        // each resolves independently and misses vanish.
        key.split(' ')
            .map(|k| self.table.resolve(k))
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolves the block's own class name.
    pub fn root(&self) -> String {
        self.classes(None, None)
    }

    /// Resolves `block__element`.
    pub fn element(&self, element: &str) -> String {
        self.classes(Some(element), None)
    }

    /// Resolves `block_modifier`.
    pub fn modified(&self, modifier: &str) -> String {
        self.classes(None, Some(modifier))
    }
}
