//! Share handoff error types.

use thiserror::Error;

/// Share handoff error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ShareError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to open {uri}: {message}")]
    Launch { uri: String, message: String },
}
