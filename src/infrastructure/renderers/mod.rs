//! Renderers
//!
//! These implement the Renderer port from the domain layer.
//! Text and HTML output honor a custom template; JSON ignores it.

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

use std::fs;
use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use crate::domain::ports::{Renderer, TemplateSource};
use crate::error::{NavError, NavResult};

/// Marker a custom template must contain; replaced by the rendered menu
pub const TEMPLATE_PLACEHOLDER: &str = "{{ navigation }}";

/// Output format of a rendered menu
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented outline
    #[default]
    Text,
    /// Nested `<ul>` lists
    Html,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "html", "json"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "html" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Get the renderer for an output format
pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new()),
        OutputFormat::Html => Box::new(HtmlRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    }
}

/// Wrap rendered output in a custom template, if one is configured.
///
/// A template without the placeholder gets the menu appended.
pub(crate) fn apply_template(template: &TemplateSource, body: String) -> NavResult<String> {
    let TemplateSource::Custom(path) = template else {
        return Ok(body);
    };
    let layout = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => NavError::TemplateNotFound { path: path.clone() },
        _ => NavError::Io(err),
    })?;

    if layout.contains(TEMPLATE_PLACEHOLDER) {
        Ok(layout.replace(TEMPLATE_PLACEHOLDER, body.trim_end()))
    } else {
        Ok(layout + &body)
    }
}
