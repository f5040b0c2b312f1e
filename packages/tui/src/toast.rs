//! Auto-dismissing toast notifications

use std::time::{Duration, Instant};

/// Visual tone of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification that dismisses itself after a fixed duration
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(message, ToastKind::Success, duration)
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(message, ToastKind::Error, duration)
    }

    fn new(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            duration,
        }
    }

    /// Whether the display window has elapsed
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}
