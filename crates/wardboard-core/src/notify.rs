//! Notification sink.
//!
//! Fire-and-forget toasts: no acknowledgement, no delivery contract. The UI
//! shell polls the queue and renders whatever is pending.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Toast severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }
}

/// A single queued toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Queue-backed notifier; the consumer drains pending toasts.
#[derive(Debug, Default)]
pub struct QueueNotifier {
    queue: Mutex<Vec<Notification>>,
}

impl QueueNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        match self.queue.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl Notifier for QueueNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(Notification {
                kind,
                message: message.to_string(),
            });
        }
    }
}
