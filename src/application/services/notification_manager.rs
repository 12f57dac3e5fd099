use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::notification::{Notification, NotificationLevel};

const MAX_QUEUED: usize = 8;

/// Queue of toasts shown one at a time, oldest first.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl NotificationManager {
    /// Creates an empty queue whose toasts stay up for `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    /// Queues a notification; the oldest pending one is dropped past capacity.
    pub fn push(&mut self, notification: Notification) {
        if self.queue.len() >= MAX_QUEUED {
            self.queue.remove(1);
        }
        self.queue
            .push_back(notification.with_duration(self.default_duration));
    }

    /// Queues a toast with the given level.
    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(Notification::new(level, title, message));
    }

    /// Queues a success toast.
    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, title, message);
    }

    /// Queues an error toast.
    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, title, message);
    }

    /// Starts the front toast's timer and drops it once expired.
    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    /// Toast to display now, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }
}
