//! Domain layer with business entities, calculations and port definitions.

/// API reachability status.
pub mod connection;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Monetary input and display rules.
pub mod money;
/// In-app notifications.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Domain calculations.
pub mod services;

pub use connection::ConnectionStatus;
pub use entities::{Entity, ResourceKind};
pub use errors::{ApiError, ShareError};
pub use ports::{HealthPort, ResourcePort, SharePort};
