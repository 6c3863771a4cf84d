//! Notification Channel
//!
//! Fire-and-forget operator notifications ("toasts"). The session gate and
//! the submission store report the outcome of every operation through a
//! [`Notifier`]; they never read anything back from it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde::Serialize;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// A single operator-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

/// Sink for operator notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Shared handle used by services.
pub type SharedNotifier = Arc<dyn Notifier>;

fn log_notification(notification: &Notification) {
    match notification.severity {
        Severity::Info => tracing::info!(
            title = %notification.title,
            description = %notification.description,
            "Notification"
        ),
        Severity::Error => tracing::warn!(
            title = %notification.title,
            description = %notification.description,
            "Notification"
        ),
    }
}

/// Bounded in-memory queue of notifications waiting to be shown.
///
/// Also logs every notification. When full, the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct NotificationBuffer {
    inner: Arc<Mutex<VecDeque<Notification>>>,
    capacity: usize,
}

impl NotificationBuffer {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Take every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }

    /// Copy of the queue without consuming it.
    pub fn snapshot(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(queue) => queue.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(queue) => queue.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NotificationBuffer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl Notifier for NotificationBuffer {
    fn notify(&self, notification: Notification) {
        log_notification(&notification);
        let mut queue = match self.inner.lock() {
            Ok(queue) => queue,
            Err(poisoned) => poisoned.into_inner(),
        };
        if queue.len() >= self.capacity {
            queue.pop_front();
        }
        queue.push_back(notification);
    }
}
