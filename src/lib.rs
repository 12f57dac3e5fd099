//! Crewlo - a terminal client for a construction management API.
//!
//! This crate provides project, lead, estimate, material, proposal and
//! invoice screens with clean architecture: entities and calculations in the
//! domain, use cases in the application layer, HTTP and local adapters in the
//! infrastructure, and a ratatui interface on top.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, presenters and DTOs.
pub mod application;
/// Domain layer containing entities, calculations, errors and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "crewlo";
