//! Presentation Layer
//!
//! CLI argument parsing (via clap) and the console formatting of results.

pub mod cli;
pub mod output;

pub use cli::{parse_label_path, Cli, Commands};
