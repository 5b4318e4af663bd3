//! Console formatting of command results

use std::fmt::Write as _;
use std::path::Path;

use crate::application::CheckReport;
use crate::config::ConfigWarning;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            warn: "[!]",
        }
    }

    fn pick(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// One line per warning, for stderr
pub fn format_warnings(warnings: &[ConfigWarning], unicode: bool) -> String {
    let icons = Icons::pick(unicode);
    let mut out = String::new();
    for warning in warnings {
        let _ = writeln!(out, "{} {}", icons.warn, warning);
    }
    out
}

/// Summary printed by `navtree check`
pub fn format_check_report(report: &CheckReport, source: &Path, unicode: bool) -> String {
    let icons = Icons::pick(unicode);
    let mut out = String::new();

    let status = if report.is_clean() {
        icons.check
    } else {
        icons.warn
    };
    let _ = writeln!(out, "{} {}", status, source.display());
    let _ = writeln!(
        out,
        "  {} nodes, depth {}",
        report.node_count, report.depth
    );
    if let Some(current) = &report.current {
        let _ = writeln!(out, "  current: {}", current);
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            let _ = writeln!(out, "    {} {}", icons.warn, warning);
        }
    }

    out
}
