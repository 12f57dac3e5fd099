//! Use case implementations.

mod load_dashboard_use_case;
mod manage_records_use_case;

pub use load_dashboard_use_case::LoadDashboardUseCase;
pub use manage_records_use_case::{ManageRecordsUseCase, ResourcePorts};
