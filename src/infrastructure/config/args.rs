use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "CREWLO_BACKEND_URL";

/// Command line flags; each one overrides the matching config file value.
#[derive(Debug, Parser)]
#[command(
    name = "crewlo",
    version,
    about = "A terminal client for the Crewlo construction management API",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL.
    #[arg(long, value_name = "URL", env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,
}
