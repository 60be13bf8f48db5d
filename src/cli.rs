use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};
use env_logger::{Builder, Env};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "snipscan",
    version,
    about = "Extract BEGIN/END SNIPPET blocks and their dependencies as JSON",
    long_about = None
)]
pub struct Args {
    /// Path to scan (directory or file)
    #[arg(value_name = "PATH", default_value = ".", value_hint = ValueHint::AnyPath)]
    pub path: PathBuf,

    /// Source file extension to scan (no dot)
    #[arg(long = "ext", value_name = "EXT", default_value = "rs")]
    pub extension: String,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pub pretty: bool,

    /// Follow symlinks
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    pub follow_symlinks: bool,

    /// Show a progress bar
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    pub progress: bool,

    /// Verbose logging (-v info, -vv debug)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if scanning or serialization fails.
pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);
    run_impl::run_with_args(&args)
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG still wins over -v
    let _ = Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .try_init();
}
