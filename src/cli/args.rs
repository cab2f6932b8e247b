use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for pkgfix.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project root to rewrite. Defaults to the compiled-in project path.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decode and substitute without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Truncate and rewrite files in place instead of replacing them through a
    /// temporary file.
    #[arg(long = "no-atomic")]
    pub no_atomic: bool,

    /// Print the run report as JSON instead of the completion message.
    #[arg(long)]
    pub json: bool,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
