//! JSON renderer
//!
//! Serializes the sorted tree. When labels are translated the original
//! label is kept and the translation goes into `title`. Custom templates
//! do not apply to JSON output.

use serde::Serialize;

use crate::domain::entities::MenuItem;
use crate::domain::ports::{RenderContext, Renderer};
use crate::domain::value_objects::Priority;
use crate::error::NavResult;

/// Renders the tree as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonItem<'a> {
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    url: &'a str,
    #[serde(skip_serializing_if = "is_absent")]
    priority: &'a Priority,
    current: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonItem<'a>>,
}

fn is_absent(priority: &&Priority) -> bool {
    priority.is_absent()
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }

    fn convert<'a>(ctx: &RenderContext<'_>, item: &'a MenuItem) -> JsonItem<'a> {
        let title = ctx
            .translator
            .filter(|_| ctx.template.translates())
            .map(|translator| translator.translate(&item.label));
        JsonItem {
            label: &item.label,
            title,
            url: &item.url,
            priority: &item.priority,
            current: item.current,
            children: item
                .children
                .iter()
                .map(|child| Self::convert(ctx, child))
                .collect(),
        }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> NavResult<String> {
        let mut out = serde_json::to_string_pretty(&Self::convert(ctx, ctx.menu))?;
        out.push('\n');
        Ok(out)
    }
}
