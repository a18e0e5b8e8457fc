//! Command-line argument parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Portfolio engine
///
/// Loads the live repository feed for the configured account and renders
/// the portfolio page: projects, featured work, testimonials and blog digest.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, searches for folio.toml in:
    /// 1. $FOLIO_CONFIG environment variable
    /// 2. Current directory
    /// 3. ~/.config/folio/folio.toml
    #[arg(short, long, value_name = "FILE", env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level
    ///
    /// Valid values: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info", env = "FOLIO_LOG")]
    pub log_level: String,

    /// Output logs as JSON (for structured logging)
    #[arg(long, default_value = "false", env = "FOLIO_LOG_JSON")]
    pub log_json: bool,

    /// Account whose repositories are listed (overrides feed.handle)
    #[arg(long, value_name = "HANDLE")]
    pub handle: Option<String>,

    /// Output format for the rendered page
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Keep the testimonial carousel running for this many ticks
    #[arg(long, value_name = "TICKS", default_value_t = 0)]
    pub rotate: u32,
}

/// How the page is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections.
    Text,
    /// The page snapshot as pretty-printed JSON.
    Json,
}
