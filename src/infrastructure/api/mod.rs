//! Crewlo REST API adapter.

mod client;
mod dto;

pub use client::{ApiClient, HttpResource};
pub use dto::ApiInfo;
