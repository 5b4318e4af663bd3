//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `renderers/` - Text, HTML and JSON renderers
//! - `translator/` - TOML-backed message catalog

pub mod renderers;
pub mod translator;

// Re-export for convenience
pub use renderers::{renderer_for, HtmlRenderer, JsonRenderer, OutputFormat, TextRenderer};
pub use translator::MessageCatalog;
