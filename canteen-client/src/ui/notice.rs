//! Toasts and inline alerts

use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

use super::html::escape;
use super::timing::{ALERT_ERROR_DURATION, TOAST_DURATION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A value that disappears after its time-to-live
#[derive(Debug, Clone)]
pub struct Expiring<T> {
    value: T,
    shown_at: Instant,
    ttl: Option<Duration>,
}

impl<T> Expiring<T> {
    pub fn new(value: T, ttl: Option<Duration>) -> Self {
        Self {
            value,
            shown_at: Instant::now(),
            ttl,
        }
    }

    /// The value, unless its time is up
    pub fn get(&self) -> Option<&T> {
        match self.ttl {
            Some(ttl) if self.shown_at.elapsed() >= ttl => None,
            _ => Some(&self.value),
        }
    }
}

/// Transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: NoticeKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="toast toast-{}"><div class="toast-icon">{}</div><div><div class="toast-title">{}</div><div class="toast-message">{}</div></div></div>"#,
            self.kind.as_str(),
            self.kind.icon(),
            self.kind.title(),
            escape(&self.message)
        )
    }
}

/// Holds at most one toast; a new one replaces the old
#[derive(Debug, Default)]
pub struct ToastHost {
    current: Mutex<Option<Expiring<Toast>>>,
}

impl ToastHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, toast: Toast) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(Expiring::new(toast, Some(TOAST_DURATION)));
    }

    /// Toast still on screen, if any
    pub fn current(&self) -> Option<Toast> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(|t| t.get().cloned())
    }
}

/// Inline form alert (login, signup, password reset)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: NoticeKind,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    /// Errors hide themselves; successes stay until replaced
    pub fn ttl(&self) -> Option<Duration> {
        match self.kind {
            NoticeKind::Error => Some(ALERT_ERROR_DURATION),
            NoticeKind::Success => None,
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="alert alert-{}"><span>{}</span><span>{}</span></div>"#,
            self.kind.as_str(),
            self.kind.icon(),
            escape(&self.message)
        )
    }
}
