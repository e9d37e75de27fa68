//! virtscroll - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use virtscroll::state::Pane;
use virtscroll::virtualizer::ScrollAlign;

/// virtscroll - fixed-size list and grid virtualization in the terminal
#[derive(Parser, Debug)]
#[command(name = "virtscroll")]
#[command(version)]
#[command(about = "Scroll through 10 000 rows, columns and grid cells while only rendering what is visible")]
pub struct Args {
    /// Number of items on every axis
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Items rendered beyond each edge of the viewport
    #[arg(short, long)]
    pub overscan: Option<usize>,

    /// Default alignment for jumps: start, center, end or auto
    #[arg(short, long)]
    pub align: Option<ScrollAlign>,

    /// Pane shown on startup: rows, columns or grid
    #[arg(short, long, default_value = "rows")]
    pub pane: Pane,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = virtscroll::config::load_config_with_precedence(args.config.clone())?;
        let merged = virtscroll::config::merge_config(config_file);
        let with_env = virtscroll::config::apply_env_overrides(merged)?;
        virtscroll::config::apply_cli_overrides(with_env, args.count, args.overscan, args.align)
    };

    virtscroll::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        pane = %args.pane,
        "Configuration loaded and resolved"
    );

    virtscroll::view::run(&config, args.pane)?;

    Ok(())
}
