//! Domain Layer
//!
//! The navigation tree itself - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - NavigationTree, NavigationNode, MenuItem
//! - `value_objects/` - Priority, SortMode
//! - `policies/` - SortPolicy
//! - `ports/` - Renderer and Translator traits for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Single owner** - The tree owns every node and the current marker
//! 3. **Ports & Adapters** - Rendering and translation go through traits

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
