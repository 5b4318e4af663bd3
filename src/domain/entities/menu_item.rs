//! Render-ready snapshot of a navigation subtree

use serde::Serialize;

use crate::domain::value_objects::Priority;

/// A node as handed to renderers, children already in sorted order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub url: String,
    #[serde(skip_serializing_if = "Priority::is_absent")]
    pub priority: Priority,
    pub current: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Childless, non-current item without priority
    pub fn leaf(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            priority: Priority::Absent,
            current: false,
            children: Vec::new(),
        }
    }

    /// Whether this item or any descendant is current
    pub fn contains_current(&self) -> bool {
        self.current || self.children.iter().any(MenuItem::contains_current)
    }

    /// Number of items in this subtree, including itself
    pub fn total_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MenuItem::total_count)
            .sum::<usize>()
    }
}
