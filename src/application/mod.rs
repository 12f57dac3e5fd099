//! Application layer with use cases, presenters and DTOs.

/// Data transfer objects.
pub mod dto;
/// Presentation-independent services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{DashboardStats, RecordCard, RecordForm, RecordSet, ShareMessage};
pub use use_cases::{LoadDashboardUseCase, ManageRecordsUseCase, ResourcePorts};
