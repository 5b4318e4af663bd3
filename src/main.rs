//! navtree CLI - build and render navigation menus
//!
//! Usage: navtree <COMMAND>
//!
//! Commands:
//!   render  Render a menu definition as text, HTML or JSON
//!   check   Validate a menu definition

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use navtree::application::{check_menu, RenderOptions, RenderUseCase};
use navtree::infrastructure::MessageCatalog;
use navtree::presentation::output::{format_check_report, format_warnings};
use navtree::presentation::{parse_label_path, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            file,
            format,
            sort,
            current,
            template,
            translations,
        } => {
            let catalog = translations
                .as_deref()
                .map(|path| {
                    MessageCatalog::load(path)
                        .with_context(|| format!("failed to load translations {}", path.display()))
                })
                .transpose()?;
            let options = RenderOptions {
                format,
                sort,
                current: current.as_deref().map(parse_label_path),
                template,
                catalog,
            };
            cmd_render(&file, &options)
        }
        Commands::Check { file, ascii } => cmd_check(&file, !ascii),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("navtree={default_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_render(file: &Path, options: &RenderOptions) -> Result<()> {
    let (use_case, warnings) = RenderUseCase::from_file(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    eprint!("{}", format_warnings(&warnings, true));

    let output = use_case.execute(options)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn cmd_check(file: &Path, unicode: bool) -> Result<()> {
    let report = check_menu(file).with_context(|| format!("{} is not a valid menu", file.display()))?;
    print!("{}", format_check_report(&report, file, unicode));
    Ok(())
}
