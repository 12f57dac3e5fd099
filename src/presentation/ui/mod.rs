//! UI screens.

mod app;
mod backend;
mod confirm_popup;
mod dashboard_screen;
mod form_modal;
mod notification_popup;
mod records_screen;
mod share_popup;
mod utils;

pub use app::App;
pub use backend::{Backend, BackendCommand, BackendEvent, BackendServices, ShareChannel};
pub use confirm_popup::ConfirmDelete;
pub use dashboard_screen::{DashboardScreen, DashboardScreenState};
pub use form_modal::FormModalState;
pub use notification_popup::NotificationPopup;
pub use records_screen::{RecordsScreen, RecordsScreenState};
pub use share_popup::SharePopup;
