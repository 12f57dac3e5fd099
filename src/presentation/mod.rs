//! Presentation layer with UI components and event handling.

/// Key binding registry.
pub mod commands;
/// Event handling.
pub mod events;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::{App, BackendServices};
