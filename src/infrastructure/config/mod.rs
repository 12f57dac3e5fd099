//! Application configuration.

pub mod app_config;
/// Command line flags.
pub mod args;
/// Persisted UI session state.
pub mod state_config;
/// Config directory and file loading.
pub mod storage;

pub use app_config::{AppConfig, DEFAULT_API_URL, LogLevel, UiConfig};
pub use args::{API_URL_ENV, CliArgs};
pub use state_config::{LastScreen, StateConfig};
pub use storage::{ConfigError, StorageManager};
