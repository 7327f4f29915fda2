//! # User-Facing Notifications
//!
//! Toast notifications triggered by core operations. Every failure path and
//! every destructive success path emits exactly one notification describing
//! the outcome; the rendering layer drains the queue and displays them.

use std::{
    collections::VecDeque,
    sync::Mutex,
};

use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
    Warning,
}

/// One user-visible toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level:   NotificationLevel,
    pub message: String,
}

impl Notification {
    /// Create a success notification.
    #[must_use]
    pub fn success(message: impl ToString) -> Self {
        Self {
            level:   NotificationLevel::Success,
            message: message.to_string(),
        }
    }

    /// Create an error notification.
    #[must_use]
    pub fn error(message: impl ToString) -> Self {
        Self {
            level:   NotificationLevel::Error,
            message: message.to_string(),
        }
    }

    /// Create an info notification.
    #[must_use]
    pub fn info(message: impl ToString) -> Self {
        Self {
            level:   NotificationLevel::Info,
            message: message.to_string(),
        }
    }

    /// Create a warning notification.
    #[must_use]
    pub fn warning(message: impl ToString) -> Self {
        Self {
            level:   NotificationLevel::Warning,
            message: message.to_string(),
        }
    }
}

/// Sink for user-facing notifications.
///
/// Core operations take a notifier instead of touching the queue directly,
/// so tests can substitute a recording sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// FIFO queue of pending notifications, drained by the rendering layer.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    inner: Mutex<VecDeque<Notification>>,
}

impl NotificationQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Remove and return all pending notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut queue = self.inner.lock().expect("notification lock poisoned");
        queue.drain(..).collect()
    }

    /// Number of pending notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().expect("notification lock poisoned").len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        tracing::debug!(level = ?notification.level, message = %notification.message, "Notification queued");
        let mut queue = self.inner.lock().expect("notification lock poisoned");
        queue.push_back(notification);
    }
}
