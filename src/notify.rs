//! Toast notifications
//!
//! Short messages emitted after user actions. The front end decides how to
//! show them; the command line prints each one as a single line.

use std::fmt;

use crate::error::FinanceError;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Error toast for a failed action
    pub fn from_error(err: &FinanceError) -> Self {
        Self::error(err.to_string())
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind.icon(), self.kind.title(), self.message)
    }
}

/// Pending notifications, oldest first
///
/// When notifications are disabled in the preferences only errors are
/// queued.
#[derive(Debug)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
    enabled: bool,
}

impl NotificationQueue {
    pub fn new(enabled: bool) -> Self {
        Self {
            notifications: Vec::new(),
            enabled,
        }
    }

    /// Queue a notification, dropping non-errors while disabled
    pub fn push(&mut self, notification: Notification) {
        if self.enabled || notification.is_error() {
            self.notifications.push(notification);
        }
    }

    /// Take every queued notification, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let n = Notification::success("Transaction added");
        assert_eq!(n.to_string(), "[+] Success: Transaction added");
    }

    #[test]
    fn test_from_error() {
        let n = Notification::from_error(&FinanceError::goal_not_found("goal-9"));
        assert!(n.is_error());
        assert_eq!(n.message, "Saving goal not found: goal-9");
    }

    #[test]
    fn test_drain_keeps_order_and_empties_queue() {
        let mut queue = NotificationQueue::new(true);
        queue.push(Notification::success("Goal created"));
        queue.push(Notification::warning("Near budget"));

        let messages: Vec<String> = queue.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, ["Goal created", "Near budget"]);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_disabled_queue_keeps_only_errors() {
        let mut queue = NotificationQueue::new(false);
        queue.push(Notification::warning("Over budget"));
        queue.push(Notification::error("Save failed"));

        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert!(drained[0].is_error());
    }
}
