//! Domain error types.

mod api_error;
mod share_error;

pub use api_error::ApiError;
pub use share_error::ShareError;
