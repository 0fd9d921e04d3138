//! sawmill - A TUI explorer for build-tool console logs
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use sawmill_core::prelude::*;
use sawmill_core::{config, logging, LogExplorer};

/// sawmill - A TUI explorer for build-tool console logs
#[derive(Parser, Debug)]
#[command(name = "sawmill")]
#[command(about = "Extract and highlight summary blocks from a build log", long_about = None)]
struct Args {
    /// Path to the log file (defaults to the build tool's own console log)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Show only the last N entries (0 = all)
    #[arg(long, value_name = "N")]
    last: Option<usize>,

    /// Print highlighted entries to stdout instead of opening the viewer
    #[arg(long)]
    plain: bool,

    /// With --plain, strip the markup tags as well
    #[arg(long)]
    no_markup: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;
    let settings = config::load_settings();

    // CLI beats config beats the platform default
    let log_path = args
        .path
        .or(settings.log.path)
        .unwrap_or_else(config::default_log_path);
    let entries_to_show = args.last.unwrap_or(settings.ui.entries_to_show);

    info!(path = %log_path.display(), entries_to_show, plain = args.plain, "starting");

    if args.plain {
        run_plain(&log_path, entries_to_show, args.no_markup)?;
    } else {
        sawmill_tui::run(log_path, entries_to_show)?;
    }

    Ok(())
}

/// One-shot mode: parse and dump entries to stdout
fn run_plain(log_path: &std::path::Path, entries_to_show: usize, no_markup: bool) -> Result<()> {
    let mut explorer = LogExplorer::default();
    let total = explorer.parse_file(log_path)?;

    let entries = explorer.entries();
    let start = match entries_to_show {
        0 => 0,
        n => entries.len().saturating_sub(n),
    };

    for entry in &entries[start..] {
        if no_markup {
            println!("{}", explorer.highlighter().dialect().strip(entry));
        } else {
            println!("{entry}");
        }
        println!();
    }
    eprintln!("Total: {total} entries");

    Ok(())
}
