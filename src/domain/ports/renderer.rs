//! Renderer port - turns a sorted navigation tree into output
//!
//! The tree calls its renderer exactly once per `render()`, after every
//! subtree has been sorted in place.

use std::path::{Path, PathBuf};

use crate::domain::entities::MenuItem;
use crate::error::NavResult;

use super::translator::Translator;

/// Which template a renderer should use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Template explicitly configured by the caller
    Custom(PathBuf),
    /// Built-in template showing raw labels
    Default,
    /// Built-in template that runs labels through the translator
    DefaultTranslated,
}

impl TemplateSource {
    /// An explicit template wins; otherwise the default depends on
    /// whether a translator is configured.
    pub fn resolve(custom: Option<&Path>, has_translator: bool) -> Self {
        match custom {
            Some(path) => TemplateSource::Custom(path.to_path_buf()),
            None if has_translator => TemplateSource::DefaultTranslated,
            None => TemplateSource::Default,
        }
    }

    /// Whether labels should be translated before display
    pub fn translates(&self) -> bool {
        !matches!(self, TemplateSource::Default)
    }
}

/// Everything a renderer receives
pub struct RenderContext<'a> {
    /// Root of the sorted tree
    pub menu: &'a MenuItem,
    /// Configured translator, if any
    pub translator: Option<&'a dyn Translator>,
    /// Resolved template
    pub template: &'a TemplateSource,
}

impl RenderContext<'_> {
    /// Label as it should be displayed under the resolved template
    pub fn display_label(&self, label: &str) -> String {
        match self.translator {
            Some(translator) if self.template.translates() => translator.translate(label),
            _ => label.to_string(),
        }
    }
}

/// Output backend for a navigation tree
pub trait Renderer {
    /// Produce the final output for a sorted tree
    fn render(&self, ctx: &RenderContext<'_>) -> NavResult<String>;
}
