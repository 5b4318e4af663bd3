//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod renderer;
pub mod translator;

pub use renderer::{RenderContext, Renderer, TemplateSource};
pub use translator::{translate_label, Translator};
