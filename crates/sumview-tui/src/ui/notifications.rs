// Notification/toast system for status bar feedback.
// A small queue with levels and auto-dismiss; errors jump the line.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Warning => "⚠",
            NotificationLevel::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    pub shown_at: Option<Instant>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration: Duration::from_secs(3),
            shown_at: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration: Duration::from_secs(3),
            shown_at: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration: Duration::from_secs(4),
            shown_at: None,
        }
    }

    /// Errors linger: the user should get to read why a request failed
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration: Duration::from_secs(8),
            shown_at: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at
            .map(|shown| shown.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn mark_shown(&mut self) {
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
    current: Option<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if notification.level == NotificationLevel::Error {
            // Preempt whatever is showing
            self.current = None;
            self.pending.push_front(notification);
        } else {
            self.pending.push_back(notification);
        }
    }

    /// Advance past expired notifications; called from the app tick
    pub fn advance(&mut self) {
        if self
            .current
            .as_ref()
            .map(|n| n.is_expired())
            .unwrap_or(true)
        {
            self.current = self.pending.pop_front();
            if let Some(ref mut n) = self.current {
                n.mark_shown();
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_for_same_level() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("first"));
        queue.push(Notification::info("second"));

        queue.advance();
        assert_eq!(queue.current().unwrap().message, "first");
    }

    #[test]
    fn test_error_preempts_current() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("routine"));
        queue.advance();
        assert_eq!(queue.current().unwrap().message, "routine");

        queue.push(Notification::error("request failed"));
        queue.advance();
        assert_eq!(queue.current().unwrap().message, "request failed");
        assert_eq!(queue.current().unwrap().level, NotificationLevel::Error);
    }

    #[test]
    fn test_dismiss_then_advance_shows_next() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("one"));
        queue.push(Notification::success("two"));
        queue.advance();
        queue.dismiss();
        queue.advance();
        assert_eq!(queue.current().unwrap().message, "two");
    }

    #[test]
    fn test_unshown_notification_is_not_expired() {
        let n = Notification::info("fresh");
        assert!(!n.is_expired());
    }
}
