//! Check Use Case
//!
//! Validates a menu file by building its tree without rendering it.

use std::path::Path;

use tracing::info;

use crate::config::ConfigWarning;
use crate::error::NavResult;

use super::render::{RenderOptions, RenderUseCase};

/// Result of checking a menu file
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Nodes in the built tree, root included
    pub node_count: usize,
    /// Deepest level below the root
    pub depth: usize,
    /// Label of the current node, if one is flagged
    pub current: Option<String>,
    /// Non-fatal problems such as unknown keys
    pub warnings: Vec<ConfigWarning>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Load `path` and build its tree; errors are the first fatal problem found
pub fn check_menu(path: &Path) -> NavResult<CheckReport> {
    let (use_case, warnings) = RenderUseCase::from_file(path)?;
    let tree = use_case.build(&RenderOptions::default())?;

    let root = tree.root();
    let depth = tree
        .descendants(root)
        .into_iter()
        .map(|id| {
            let mut level = 0;
            let mut cursor = tree[id].parent();
            while let Some(parent) = cursor {
                level += 1;
                cursor = tree[parent].parent();
            }
            level
        })
        .max()
        .unwrap_or(0);
    let current = tree.current();
    let current = tree[current]
        .is_current()
        .then(|| tree[current].label().to_string());

    info!(nodes = tree.node_count(), depth, warnings = warnings.len(), "menu checked");
    Ok(CheckReport {
        node_count: tree.node_count(),
        depth,
        current,
        warnings,
    })
}
