//! Data transfer objects for the application layer.

mod dashboard_dto;
mod form_dto;
mod record_dto;

pub use dashboard_dto::DashboardStats;
pub use form_dto::{FieldKind, FieldSpec, FormSpec, FormValues, RecordForm, SelectOption};
pub use record_dto::{RecordCard, RecordSet, References, ShareMessage};
