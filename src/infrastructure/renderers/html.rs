//! HTML renderer
//!
//! Emits nested `<ul>` lists. The current item gets `class="current"`,
//! its ancestors `class="ancestor"`.

use crate::domain::entities::MenuItem;
use crate::domain::ports::{RenderContext, Renderer};
use crate::error::NavResult;

use super::apply_template;

/// Renders the tree as nested HTML lists
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_list(
        ctx: &RenderContext<'_>,
        items: &[MenuItem],
        indent: usize,
        class: Option<&str>,
        out: &mut String,
    ) {
        let pad = "  ".repeat(indent);
        match class {
            Some(class) => out.push_str(&format!("{pad}<ul class=\"{class}\">\n")),
            None => out.push_str(&format!("{pad}<ul>\n")),
        }
        for item in items {
            Self::render_item(ctx, item, indent + 1, out);
        }
        out.push_str(&format!("{pad}</ul>\n"));
    }

    fn render_item(ctx: &RenderContext<'_>, item: &MenuItem, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        let class = if item.current {
            " class=\"current\""
        } else if item.contains_current() {
            " class=\"ancestor\""
        } else {
            ""
        };
        out.push_str(&format!(
            "{pad}<li{class}><a href=\"{}\">{}</a>",
            escape_html(&item.url),
            escape_html(&ctx.display_label(&item.label))
        ));

        if item.children.is_empty() {
            out.push_str("</li>\n");
            return;
        }
        out.push('\n');
        Self::render_list(ctx, &item.children, indent + 1, None, out);
        out.push_str(&format!("{pad}</li>\n"));
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> NavResult<String> {
        let mut out = String::new();
        Self::render_list(
            ctx,
            std::slice::from_ref(ctx.menu),
            0,
            Some("navigation"),
            &mut out,
        );
        apply_template(ctx.template, out)
    }
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
