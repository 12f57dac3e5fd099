/// Dashboard counters and recent-record lists.
pub mod dashboard_stats;
/// Toast queue.
pub mod notification_manager;
/// Forms and cards for each resource.
pub mod record_presenter;
/// Email, SMS and clipboard texts.
pub mod share_formatter;

pub use dashboard_stats::compute_stats;
pub use notification_manager::NotificationManager;
pub use record_presenter::{Presentable, blank_form, form_spec, references_of};
pub use share_formatter::ShareFormatter;
