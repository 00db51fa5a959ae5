//! Command line interface.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments. Flags override the config file.
#[derive(Debug, Parser)]
#[command(
    name = "albumgen",
    version,
    about = "Generates Elm album storage modules from the AlbumShuffler catalog",
    long_about = None
)]
pub struct CliArgs {
    /// Directory receiving the generated modules.
    #[arg(value_name = "DIR", default_value = "output")]
    pub destination: PathBuf,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the catalog.
    #[arg(long, value_name = "URL")]
    pub source_url: Option<String>,

    /// Personal access token sent to the catalog.
    #[arg(long, env = "ALBUMGEN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Bytes read from an image before its header is parsed.
    #[arg(long, value_name = "BYTES")]
    pub header_threshold: Option<usize>,

    /// Total download attempts per image.
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Pause between image download attempts.
    #[arg(long, value_name = "MS")]
    pub retry_delay_ms: Option<u64>,
}
