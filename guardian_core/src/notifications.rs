//! # Notifications
//!
//! Every simulated feature ends in a toast. Operations across the crate return
//! a [`Notification`]; the [`ToastQueue`] holds the ones currently on screen
//! and expires them as time is fed in through [`ToastQueue::advance`].
//!
//! Time is passed in explicitly rather than read from a clock so the queue
//! behaves the same on native, WASM and in tests.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::GuardianError;

/// Default lifetime of a toast
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Default number of toasts shown at once
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Severity of a notification, drives its colour in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

impl NotificationLevel {
    /// Short lowercase tag, used by the CLI
    pub fn tag(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Info => "info",
            NotificationLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A single toast message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    /// How long the toast stays on screen. `None` means the queue default.
    pub duration: Option<Duration>,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Notification {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            duration: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    /// Build an error toast from a validation failure
    pub fn from_error(err: &GuardianError) -> Self {
        Self::error(err.to_string())
    }

    /// Override the on-screen duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Toast {
    notification: Notification,
    remaining: Duration,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    default_duration: Duration,
    max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        ToastQueue::new(DEFAULT_TOAST_DURATION, DEFAULT_MAX_VISIBLE)
    }
}

impl ToastQueue {
    pub fn new(default_duration: Duration, max_visible: usize) -> Self {
        ToastQueue {
            toasts: Vec::new(),
            default_duration,
            max_visible,
        }
    }

    /// Show a notification. Returns its id.
    pub fn push(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        let remaining = notification.duration.unwrap_or(self.default_duration);
        tracing::debug!(level = %notification.level, message = %notification.message, "toast");
        self.toasts.push(Toast {
            notification,
            remaining,
        });
        id
    }

    /// Remove a toast before it expires. Returns true if it was showing.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.notification.id != id);
        self.toasts.len() != before
    }

    /// Age every toast by `elapsed` and drop the expired ones.
    ///
    /// Returns the number of toasts removed.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let before = self.toasts.len();
        for toast in &mut self.toasts {
            toast.remaining = toast.remaining.saturating_sub(elapsed);
        }
        self.toasts.retain(|t| !t.remaining.is_zero());
        before - self.toasts.len()
    }

    /// Toasts to render, newest first, capped at `max_visible`
    pub fn visible(&self) -> Vec<&Notification> {
        self.toasts
            .iter()
            .rev()
            .take(self.max_visible)
            .map(|t| &t.notification)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_tagged() {
        assert_eq!(Notification::error("boom").to_string(), "[error] boom");
        assert_eq!(Notification::success("ok").to_string(), "[success] ok");
    }

    #[test]
    fn test_default_and_custom_duration() {
        let mut queue = ToastQueue::default();
        queue.push(Notification::info("short"));
        queue.push(Notification::error("long").with_duration(Duration::from_millis(5000)));

        assert_eq!(queue.advance(Duration::from_millis(3999)), 0);
        assert_eq!(queue.advance(Duration::from_millis(1)), 1);
        assert_eq!(queue.visible()[0].message, "long");

        assert_eq!(queue.advance(Duration::from_millis(1000)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_visible_is_newest_first_and_capped() {
        let mut queue = ToastQueue::new(DEFAULT_TOAST_DURATION, 2);
        queue.push(Notification::success("one"));
        queue.push(Notification::success("two"));
        queue.push(Notification::success("three"));

        let messages: Vec<_> = queue.visible().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["three", "two"]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Notification::info("bye"));
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_from_error_uses_display() {
        let err = GuardianError::incomplete_form("contact", vec![], "Name and phone number are required");
        let n = Notification::from_error(&err);
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.message, "Name and phone number are required");
    }
}
