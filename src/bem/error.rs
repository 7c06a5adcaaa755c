//! Manifest loading errors.

use std::path::PathBuf;

/// Error returned when a style manifest cannot be loaded.
///
/// Only the loading boundary can fail; once a [`crate::StyleTable`]
/// exists, lookups against it are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLoadError {
    /// The manifest file could not be read from disk.
    Read { path: PathBuf, message: String },
    /// The manifest content is not a flat JSON object of strings.
    Parse { message: String },
}

impl std::fmt::Display for TableLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableLoadError::Read { path, message } => {
                write!(
                    f,
                    "failed to read style manifest \"{}\": {}",
                    path.display(),
                    message
                )
            }
            TableLoadError::Parse { message } => {
                write!(f, "failed to parse style manifest: {}", message)
            }
        }
    }
}

impl std::error::Error for TableLoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = TableLoadError::Read {
            path: PathBuf::from("/dist/styles.json"),
            message: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/dist/styles.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = TableLoadError::Parse {
            message: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("parse"));
        assert!(msg.contains("line 1"));
    }
}
