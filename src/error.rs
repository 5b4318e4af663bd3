//! Error types for navtree
//!
//! Uses `thiserror` for library errors. Lookup misses are not errors:
//! `get` returns `None` and `remove` is a no-op.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::NodeId;
use crate::domain::value_objects::SortMode;

/// Result type alias for navtree operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for navtree operations
#[derive(Error, Debug)]
pub enum NavError {
    /// Node label is empty
    #[error("label must be a non-empty string, '{label}' given")]
    InvalidLabel { label: String },

    /// Sort mode is not one of the recognized values
    #[error(
        "invalid sort mode '{value}' (expected none, priority, priority-numeric, priority-lexical or label)"
    )]
    InvalidSortMode { value: String },

    /// Comparator invoked with a mode it has no rule for
    #[error("no comparison rule for sort mode '{mode}'")]
    UnsupportedSortMode { mode: SortMode },

    /// Priority value is neither a number nor text
    #[error("priority of '{label}' must be a number or a string, {found} given")]
    InvalidPriorityType { label: String, found: String },

    /// Node id is stale or belongs to another tree
    #[error("node {id} does not exist in this navigation tree")]
    UnknownNode { id: NodeId },

    /// Label path does not resolve to a node
    #[error("no navigation node at '{path}'")]
    PathNotFound { path: String },

    /// Menu definition could not be parsed
    #[error("invalid menu file {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Custom template file is missing
    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_label() {
        let err = NavError::InvalidLabel {
            label: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "label must be a non-empty string, '' given"
        );
    }

    #[test]
    fn test_error_display_unsupported_sort_mode() {
        let err = NavError::UnsupportedSortMode {
            mode: SortMode::Label,
        };
        assert_eq!(err.to_string(), "no comparison rule for sort mode 'label'");
    }

    #[test]
    fn test_error_display_invalid_priority_type() {
        let err = NavError::InvalidPriorityType {
            label: "Blog".to_string(),
            found: "array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "priority of 'Blog' must be a number or a string, array given"
        );
    }
}
