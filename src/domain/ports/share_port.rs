//! Share port definition.

use async_trait::async_trait;

use crate::domain::errors::ShareError;

/// Port for handing text to the system clipboard and URI handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SharePort: Send + Sync {
    /// Places text on the clipboard.
    async fn copy_text(&self, text: &str) -> Result<(), ShareError>;

    /// Opens a `mailto:` or `sms:` URI with the platform handler.
    async fn open_uri(&self, uri: &str) -> Result<(), ShareError>;
}
