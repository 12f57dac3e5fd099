use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Severity of a notification, which picks its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Neutral message.
    Info,
    /// Completed action.
    Success,
    /// Failed action.
    Error,
}

/// Transient in-app message shown in the corner popup.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub displayed_at: Option<Instant>,
    pub duration: Duration,
}

impl Notification {
    /// Creates a notification with the default duration.
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            displayed_at: None,
            duration: DEFAULT_DURATION,
        }
    }

    /// Success notification.
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, message)
    }

    /// Error notification.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, message)
    }

    /// Overrides how long the notification stays up.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// The display timer starts on first render, not on creation.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    /// Starts the display timer if it is not running yet.
    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_helper() {
        let n = Notification::success("Copied", "Invoice INV-001 copied to clipboard");
        assert_eq!(n.level, NotificationLevel::Success);
        assert_eq!(n.duration, DEFAULT_DURATION);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_expiry_starts_when_displayed() {
        let mut n = Notification::error("Save failed", "network error")
            .with_duration(Duration::from_nanos(1));
        std::thread::sleep(Duration::from_millis(1));
        assert!(!n.is_expired());

        n.mark_displayed();
        std::thread::sleep(Duration::from_millis(1));
        assert!(n.is_expired());
    }
}
