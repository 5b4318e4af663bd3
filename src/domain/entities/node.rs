//! Navigation node data and the builder used to create one.

use std::fmt;

use crate::domain::value_objects::{Priority, SortMode};

/// URL used when a node is added without one
pub const DEFAULT_URL: &str = "#";

/// Identity of a node inside its [`NavigationTree`](super::NavigationTree)
///
/// Ids are never reused within a tree, so an id kept past `remove`
/// resolves to nothing rather than to a newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single entry of the navigation tree
///
/// Fields are read-only from outside the crate; mutation goes through
/// [`NodeMut`](super::NodeMut) so the tree can enforce its invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationNode {
    pub(crate) label: String,
    pub(crate) url: String,
    pub(crate) priority: Priority,
    pub(crate) default_priority: Priority,
    pub(crate) sort_mode: SortMode,
    pub(crate) is_current: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl NavigationNode {
    pub(crate) fn new(label: String, url: String) -> Self {
        Self {
            label,
            url,
            priority: Priority::Absent,
            default_priority: Priority::Absent,
            sort_mode: SortMode::None,
            is_current: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }

    /// Priority handed to children created from now on
    pub fn default_priority(&self) -> &Priority {
        &self.default_priority
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn is_current(&self) -> bool {
        self.is_current
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in their stored order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arguments for adding a child node
///
/// Only the label is required. Unset fields fall back to `"#"` for the URL
/// and to the parent's default priority and sort mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewNode {
    pub label: String,
    pub url: Option<String>,
    pub priority: Option<Priority>,
    pub sort_mode: Option<SortMode>,
}

impl NewNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = Some(mode);
        self
    }
}

impl From<&str> for NewNode {
    fn from(label: &str) -> Self {
        NewNode::new(label)
    }
}

impl From<String> for NewNode {
    fn from(label: String) -> Self {
        NewNode::new(label)
    }
}

impl From<&String> for NewNode {
    fn from(label: &String) -> Self {
        NewNode::new(label.as_str())
    }
}

impl<L: Into<String>, U: Into<String>> From<(L, U)> for NewNode {
    fn from((label, url): (L, U)) -> Self {
        NewNode::new(label).url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_defaults() {
        let spec = NewNode::new("Home");
        assert_eq!(spec.label, "Home");
        assert!(spec.url.is_none());
        assert!(spec.priority.is_none());
        assert!(spec.sort_mode.is_none());
    }

    #[test]
    fn new_node_builder() {
        let spec = NewNode::new("Blog")
            .url("/blog")
            .priority(3)
            .sort_mode(SortMode::Label);
        assert_eq!(spec.url.as_deref(), Some("/blog"));
        assert_eq!(spec.priority, Some(Priority::Number(3.0)));
        assert_eq!(spec.sort_mode, Some(SortMode::Label));
    }

    #[test]
    fn tuple_sets_label_and_url() {
        let spec = NewNode::from(("About", "/about"));
        assert_eq!(spec.label, "About");
        assert_eq!(spec.url.as_deref(), Some("/about"));
    }

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId(4).to_string(), "#4");
    }
}
