//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain ordering rules (those are in Domain)
//! - Wires menu definitions to Infrastructure renderers and translators
//!
//! ## Use Cases
//!
//! - `RenderUseCase` - Build a tree from a menu definition and render it
//! - `check_menu` - Validate a menu file without rendering

pub mod check;
pub mod render;

pub use check::{check_menu, CheckReport};
pub use render::{build_tree, RenderOptions, RenderOutput, RenderUseCase};
