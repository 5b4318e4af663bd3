//! navtree - navigation menu builder
//!
//! Builds a tree of labelled links, orders each node's children by
//! priority or (translated) label, tracks a single current node and renders
//! the result through a pluggable renderer.
//!
//! ```
//! use navtree::{NavigationTree, NewNode, SortMode, TextRenderer};
//!
//! let mut tree = NavigationTree::with_root("Home", "/").unwrap();
//! tree.sort_by(SortMode::PriorityNumeric, true);
//! tree.add(NewNode::new("Blog").url("/blog").priority(20)).unwrap()
//!     .add(NewNode::new("About").url("/about").priority(10)).unwrap();
//!
//! let out = tree.render(&TextRenderer::new()).unwrap();
//! assert!(out.find("About").unwrap() < out.find("Blog").unwrap());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::MenuConfig;
pub use domain::entities::{MenuItem, NavigationNode, NavigationTree, NewNode, NodeId, NodeMut};
pub use domain::policies::SortPolicy;
pub use domain::ports::{RenderContext, Renderer, TemplateSource, Translator};
pub use domain::value_objects::{Priority, SortMode};
pub use error::{NavError, NavResult};
pub use infrastructure::{HtmlRenderer, JsonRenderer, MessageCatalog, OutputFormat, TextRenderer};
