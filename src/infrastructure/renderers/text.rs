//! Plain-text renderer
//!
//! One line per node: a current-node marker, two spaces of indentation per
//! level, the label, then the URL in an aligned column.

use unicode_width::UnicodeWidthStr;

use crate::domain::entities::MenuItem;
use crate::domain::ports::{RenderContext, Renderer};
use crate::error::NavResult;

use super::apply_template;

const CURRENT_MARKER: &str = "> ";
const PLAIN_MARKER: &str = "  ";

/// Renders the tree as an indented outline
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

struct Line {
    current: bool,
    depth: usize,
    label: String,
    url: String,
}

impl Line {
    /// Display width of indentation plus label
    fn width(&self) -> usize {
        self.depth * 2 + self.label.width()
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn collect(ctx: &RenderContext<'_>, item: &MenuItem, depth: usize, lines: &mut Vec<Line>) {
        lines.push(Line {
            current: item.current,
            depth,
            label: ctx.display_label(&item.label),
            url: item.url.clone(),
        });
        for child in &item.children {
            Self::collect(ctx, child, depth + 1, lines);
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> NavResult<String> {
        let mut lines = Vec::new();
        Self::collect(ctx, ctx.menu, 0, &mut lines);

        let column = lines.iter().map(Line::width).max().unwrap_or(0);
        let mut out = String::new();
        for line in &lines {
            let marker = if line.current {
                CURRENT_MARKER
            } else {
                PLAIN_MARKER
            };
            out.push_str(&format!(
                "{}{}{}{}  {}\n",
                marker,
                "  ".repeat(line.depth),
                line.label,
                " ".repeat(column - line.width()),
                line.url
            ));
        }

        apply_template(ctx.template, out)
    }
}
