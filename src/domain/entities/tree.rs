//! Navigation tree aggregate
//!
//! The tree owns every node in an arena and is the only place that flips
//! `is_current`, so at most one node carries the flag at any time.
//! Sorting happens in place, one level at a time, right before rendering.

use std::fmt;
use std::ops::Index;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::domain::policies::SortPolicy;
use crate::domain::ports::{RenderContext, Renderer, TemplateSource, Translator};
use crate::domain::value_objects::{Priority, SortMode};
use crate::error::{NavError, NavResult};

use super::menu_item::MenuItem;
use super::node::{NavigationNode, NewNode, NodeId, DEFAULT_URL};

/// Label given to the root of [`NavigationTree::new`]
pub const DEFAULT_ROOT_LABEL: &str = "Home";

/// Root container of a navigation menu
pub struct NavigationTree {
    /// Slots are emptied on removal and never reused
    nodes: Vec<Option<NavigationNode>>,
    root: NodeId,
    current: NodeId,
    translator: Option<Box<dyn Translator>>,
    template: Option<PathBuf>,
}

impl NavigationTree {
    /// Tree whose root is labeled "Home" and links to `#`
    pub fn new() -> Self {
        let root = NavigationNode::new(DEFAULT_ROOT_LABEL.to_string(), DEFAULT_URL.to_string());
        Self::from_root(root)
    }

    /// Tree with a custom root
    pub fn with_root(label: impl Into<String>, url: impl Into<String>) -> NavResult<Self> {
        let label = validate_label(label.into())?;
        Ok(Self::from_root(NavigationNode::new(label, url.into())))
    }

    fn from_root(root: NavigationNode) -> Self {
        Self {
            nodes: vec![Some(root)],
            root: NodeId(0),
            current: NodeId(0),
            translator: None,
            template: None,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Mutable handle on the root node
    pub fn root_mut(&mut self) -> NodeMut<'_> {
        NodeMut {
            id: self.root,
            tree: self,
        }
    }

    /// Node data, or `None` for a removed or foreign id
    pub fn get_node(&self, id: NodeId) -> Option<&NavigationNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Mutable handle on any live node
    pub fn node_mut(&mut self, id: NodeId) -> NavResult<NodeMut<'_>> {
        self.require(id)?;
        Ok(NodeMut { tree: self, id })
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get_node(id).is_some()
    }

    /// Number of live nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    /// Add a child to the root. Returns the tree for chaining.
    pub fn add(&mut self, spec: impl Into<NewNode>) -> NavResult<&mut Self> {
        self.add_child(self.root, spec)?;
        Ok(self)
    }

    /// First direct child of the root with the given label
    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.find_child(self.root, label)
    }

    /// Create a node under `parent` and return its id.
    ///
    /// Priority and sort mode not given in `spec` are inherited from the
    /// parent's default priority and sort mode as they are right now.
    pub fn add_child(&mut self, parent: NodeId, spec: impl Into<NewNode>) -> NavResult<NodeId> {
        let spec = spec.into();
        let label = validate_label(spec.label)?;
        let parent_node = self.require(parent)?;

        let mut node = NavigationNode::new(
            label,
            spec.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
        );
        node.sort_mode = spec.sort_mode.unwrap_or(parent_node.sort_mode);
        node.priority = spec
            .priority
            .unwrap_or_else(|| parent_node.default_priority.clone());
        node.default_priority = parent_node.default_priority.clone();
        node.parent = Some(parent);

        let id = NodeId(self.nodes.len());
        debug!(parent = %parent, node = %id, label = %node.label, "added navigation node");
        self.nodes.push(Some(node));
        self.require_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// First direct child of `parent` with the given label
    pub fn find_child(&self, parent: NodeId, label: &str) -> Option<NodeId> {
        self.get_node(parent)?
            .children
            .iter()
            .copied()
            .find(|&child| self.label_of(child) == Some(label))
    }

    /// Follow a path of labels down from the root.
    ///
    /// An empty path resolves to the root itself.
    pub fn find_path<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeId> {
        path.iter()
            .try_fold(self.root, |id, label| self.find_child(id, label.as_ref()))
    }

    /// Remove every direct child of `parent` labeled `label`, together
    /// with their subtrees. Returns how many children were removed.
    pub fn remove_children(&mut self, parent: NodeId, label: &str) -> NavResult<usize> {
        self.require(parent)?;
        Ok(self.detach_matching(parent, label))
    }

    fn detach_matching(&mut self, parent: NodeId, label: &str) -> usize {
        let Some(parent_node) = self.get_node(parent) else {
            return 0;
        };
        let removed: Vec<NodeId> = parent_node
            .children
            .iter()
            .copied()
            .filter(|&child| self.label_of(child) == Some(label))
            .collect();
        if removed.is_empty() {
            return 0;
        }

        if let Some(parent_node) = self.get_node_mut(parent) {
            parent_node.children.retain(|child| !removed.contains(child));
        }
        for &child in &removed {
            self.free_subtree(child);
        }
        debug!(parent = %parent, label, count = removed.len(), "removed navigation nodes");
        removed.len()
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            let Some(node) = self.nodes.get_mut(id.0).and_then(Option::take) else {
                continue;
            };
            if id == self.current {
                debug!(node = %id, "current node removed, tracking root again");
                self.current = self.root;
            }
            pending.extend(node.children);
        }
    }

    /// Make `id` the single current node.
    pub fn set_current(&mut self, id: NodeId) -> NavResult<&mut Self> {
        self.require(id)?;
        self.mark_current(id);
        Ok(self)
    }

    fn mark_current(&mut self, id: NodeId) {
        if let Some(previous) = self.get_node_mut(self.current) {
            previous.is_current = false;
        }
        if let Some(node) = self.get_node_mut(id) {
            node.is_current = true;
            self.current = id;
            debug!(node = %id, "current navigation node changed");
        }
    }

    /// Tracked current node; the root until `set_current` is called
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Set the root's sort mode, and every descendant's when `deep`.
    pub fn sort_by(&mut self, mode: SortMode, deep: bool) -> &mut Self {
        self.apply_sort_mode(self.root, mode, deep);
        self
    }

    fn apply_sort_mode(&mut self, id: NodeId, mode: SortMode, deep: bool) {
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            let Some(node) = self.get_node_mut(id) else {
                continue;
            };
            node.sort_mode = mode;
            if deep {
                pending.extend(node.children.iter().copied());
            }
        }
        debug!(node = %id, mode = %mode, deep, "sort mode applied");
    }

    pub fn set_translator(&mut self, translator: impl Translator + 'static) -> &mut Self {
        self.translator = Some(Box::new(translator));
        self
    }

    pub fn translator(&self) -> Option<&dyn Translator> {
        self.translator.as_deref()
    }

    /// Explicit template handed to the renderer instead of the defaults
    pub fn set_template(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.template = Some(path.into());
        self
    }

    pub fn template(&self) -> Option<&Path> {
        self.template.as_deref()
    }

    pub fn template_source(&self) -> TemplateSource {
        TemplateSource::resolve(self.template(), self.translator.is_some())
    }

    /// Direct children of `id` in their stored order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.get_node(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Every node below `id`, depth-first, parents before children
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = pending.pop() {
            out.push(next);
            pending.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Sort every node's children in place according to its sort mode.
    pub fn sort(&mut self) -> NavResult<()> {
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            let Some(node) = self.get_node_mut(id) else {
                continue;
            };
            let mode = node.sort_mode;
            let original = std::mem::take(&mut node.children);
            let ordered = self.ordered_children(mode, &original);

            let Some(node) = self.get_node_mut(id) else {
                continue;
            };
            match ordered {
                Ok(ordered) => {
                    trace!(node = %id, mode = %mode, count = ordered.len(), "sorted children");
                    pending.extend(ordered.iter().copied());
                    node.children = ordered;
                }
                Err(err) => {
                    node.children = original;
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn ordered_children(&self, mode: SortMode, children: &[NodeId]) -> NavResult<Vec<NodeId>> {
        let mut entries: Vec<(NodeId, &NavigationNode)> = children
            .iter()
            .filter_map(|&child| self.get_node(child).map(|node| (child, node)))
            .collect();
        SortPolicy::new(self.translator()).sort(mode, &mut entries, |entry| entry.1)?;
        Ok(entries.into_iter().map(|(child, _)| child).collect())
    }

    /// Sort, then return the root's children as render-ready items.
    pub fn items(&mut self) -> NavResult<Vec<MenuItem>> {
        Ok(self.menu()?.children)
    }

    /// Sort, then return the whole tree as render-ready items.
    pub fn menu(&mut self) -> NavResult<MenuItem> {
        self.sort()?;
        self.snapshot(self.root)
            .ok_or(NavError::UnknownNode { id: self.root })
    }

    /// Subtree at `id` in its current order, without sorting
    pub fn snapshot(&self, id: NodeId) -> Option<MenuItem> {
        let node = self.get_node(id)?;
        Some(MenuItem {
            label: node.label.clone(),
            url: node.url.clone(),
            priority: node.priority.clone(),
            current: node.is_current,
            children: node
                .children
                .iter()
                .filter_map(|&child| self.snapshot(child))
                .collect(),
        })
    }

    /// Sort the tree and hand it to `renderer`, exactly once.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &R) -> NavResult<String> {
        let menu = self.menu()?;
        let template = self.template_source();
        debug!(nodes = menu.total_count(), template = ?template, "rendering navigation");
        renderer.render(&RenderContext {
            menu: &menu,
            translator: self.translator(),
            template: &template,
        })
    }

    fn label_of(&self, id: NodeId) -> Option<&str> {
        self.get_node(id).map(NavigationNode::label)
    }

    fn require(&self, id: NodeId) -> NavResult<&NavigationNode> {
        self.get_node(id).ok_or(NavError::UnknownNode { id })
    }

    fn require_mut(&mut self, id: NodeId) -> NavResult<&mut NavigationNode> {
        self.get_node_mut(id).ok_or(NavError::UnknownNode { id })
    }

    fn get_node_mut(&mut self, id: NodeId) -> Option<&mut NavigationNode> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }
}

impl Default for NavigationTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NavigationTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationTree")
            .field("nodes", &self.node_count())
            .field("root", &self.root)
            .field("current", &self.current)
            .field("translator", &self.translator.is_some())
            .field("template", &self.template)
            .finish()
    }
}

impl Index<NodeId> for NavigationTree {
    type Output = NavigationNode;

    /// # Panics
    ///
    /// Panics if `id` was removed or comes from another tree; use
    /// [`NavigationTree::get_node`] to check first.
    fn index(&self, id: NodeId) -> &NavigationNode {
        match self.get_node(id) {
            Some(node) => node,
            None => panic!("navigation node {id} was removed or belongs to another tree"),
        }
    }
}

/// Mutable handle on one node of a [`NavigationTree`]
///
/// Mirrors the node-level operations: `add`, `get`, `remove`, `sort_by`,
/// `set_current`. Holding the handle borrows the whole tree, which is what
/// lets `set_current` clear the previous current node.
pub struct NodeMut<'a> {
    tree: &'a mut NavigationTree,
    id: NodeId,
}

impl<'a> NodeMut<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &NavigationNode {
        &self.tree[self.id]
    }

    pub fn label(&self) -> &str {
        self.node().label()
    }

    pub fn priority(&self) -> &Priority {
        self.node().priority()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.node().sort_mode()
    }

    pub fn is_current(&self) -> bool {
        self.node().is_current()
    }

    /// Add a child. Returns this handle for chaining.
    pub fn add(&mut self, spec: impl Into<NewNode>) -> NavResult<&mut Self> {
        self.tree.add_child(self.id, spec)?;
        Ok(self)
    }

    /// Add a child and return its id.
    pub fn add_child(&mut self, spec: impl Into<NewNode>) -> NavResult<NodeId> {
        self.tree.add_child(self.id, spec)
    }

    /// First direct child with the given label
    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.tree.find_child(self.id, label)
    }

    /// Handle on the first direct child with the given label
    pub fn get_mut(&mut self, label: &str) -> Option<NodeMut<'_>> {
        let id = self.get(label)?;
        Some(NodeMut {
            tree: &mut *self.tree,
            id,
        })
    }

    /// Remove every direct child with the given label; no-op when none match.
    pub fn remove(&mut self, label: &str) -> &mut Self {
        self.tree.detach_matching(self.id, label);
        self
    }

    pub fn sort_by(&mut self, mode: SortMode, deep: bool) -> &mut Self {
        self.tree.apply_sort_mode(self.id, mode, deep);
        self
    }

    /// Make this node the tree's current node.
    pub fn set_current(&mut self) -> &mut Self {
        self.tree.mark_current(self.id);
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> NavResult<&mut Self> {
        let label = validate_label(label.into())?;
        if let Some(node) = self.tree.get_node_mut(self.id) {
            node.label = label;
        }
        Ok(self)
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        if let Some(node) = self.tree.get_node_mut(self.id) {
            node.url = url.into();
        }
        self
    }

    pub fn set_priority(&mut self, priority: impl Into<Priority>) -> &mut Self {
        if let Some(node) = self.tree.get_node_mut(self.id) {
            node.priority = priority.into();
        }
        self
    }

    /// Priority inherited by children added after this call
    pub fn set_default_priority(&mut self, priority: impl Into<Priority>) -> &mut Self {
        if let Some(node) = self.tree.get_node_mut(self.id) {
            node.default_priority = priority.into();
        }
        self
    }
}

fn validate_label(label: String) -> NavResult<String> {
    if label.trim().is_empty() {
        return Err(NavError::InvalidLabel { label });
    }
    Ok(label)
}
