//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//! `--verbose` is global so it works before or after the subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::SortMode;
use crate::infrastructure::OutputFormat;

/// navtree - build and render navigation menus
#[derive(Parser, Debug)]
#[command(name = "navtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a menu definition
    Render {
        /// Menu definition (TOML)
        file: PathBuf,

        /// Output format (overrides [output] format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Sort mode applied to every node: none, priority, priority-numeric,
        /// priority-lexical, label (or 0-4)
        #[arg(short, long, value_parser = parse_sort_mode)]
        sort: Option<SortMode>,

        /// Current item as a label path, e.g. "Articles/2024"
        #[arg(short, long)]
        current: Option<String>,

        /// Custom template containing {{ navigation }}
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Message catalog used to translate labels
        #[arg(long)]
        translations: Option<PathBuf>,
    },

    /// Validate a menu definition and report its shape
    Check {
        /// Menu definition (TOML)
        file: PathBuf,

        /// Plain ASCII status icons
        #[arg(long)]
        ascii: bool,
    },
}

fn parse_sort_mode(value: &str) -> Result<SortMode, String> {
    value.parse::<SortMode>().map_err(|err| err.to_string())
}

/// Split a `A/B/C` label path; empty segments are dropped
pub fn parse_label_path(value: &str) -> Vec<String> {
    value
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
