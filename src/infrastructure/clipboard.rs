//! System clipboard and URI handler adapter.

use arboard::Clipboard;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::errors::ShareError;
use crate::domain::ports::SharePort;

/// Hands share text to the desktop: clipboard through `arboard`, `mailto:`
/// and `sms:` links through the platform opener.
#[derive(Clone, Default)]
pub struct SystemShare {}

impl SystemShare {
    /// Creates the adapter.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl SharePort for SystemShare {
    async fn copy_text(&self, text: &str) -> Result<(), ShareError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut cb = Clipboard::new().map_err(|e| {
                warn!(error = %e, "Failed to initialize clipboard for copy");
                ShareError::Clipboard(e.to_string())
            })?;
            cb.set_text(text)
                .map_err(|e| ShareError::Clipboard(e.to_string()))
        })
        .await
        .map_err(|e| ShareError::Clipboard(e.to_string()))?
    }

    async fn open_uri(&self, uri: &str) -> Result<(), ShareError> {
        debug!(scheme = uri.split(':').next().unwrap_or_default(), "Opening share link");
        let owned = uri.to_string();
        tokio::task::spawn_blocking(move || opener::open(&owned))
            .await
            .map_err(|e| ShareError::Launch {
                uri: uri.to_string(),
                message: e.to_string(),
            })?
            .map_err(|e| ShareError::Launch {
                uri: uri.to_string(),
                message: e.to_string(),
            })
    }
}
