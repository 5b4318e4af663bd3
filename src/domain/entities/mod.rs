//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `NavigationTree` - Owns every node and the current-node marker
//! - `NavigationNode` - A labeled, URL-bearing entry
//! - `MenuItem` - Sorted snapshot handed to renderers

mod menu_item;
mod node;
mod tree;

pub use menu_item::MenuItem;
pub use node::{NavigationNode, NewNode, NodeId, DEFAULT_URL};
pub use tree::{NavigationTree, NodeMut, DEFAULT_ROOT_LABEL};
