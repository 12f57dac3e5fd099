mod footer_bar;
mod header_bar;
mod input;
mod status_bar;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle, NavTab};
pub use input::TextInput;
pub use status_bar::{StatusBar, StatusLevel};
