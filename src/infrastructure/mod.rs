//! Infrastructure layer with external service adapters.

/// Backend HTTP API client.
pub mod api;
pub mod clipboard;
/// Application configuration.
pub mod config;
/// Locally held invoices.
pub mod invoice_store;

pub use api::{ApiClient, ApiInfo, HttpResource};
pub use clipboard::SystemShare;
pub use config::{AppConfig, CliArgs, LogLevel, StateConfig, StorageManager};
pub use invoice_store::InvoiceStore;
