//! The single transient confirmation message (the snackbar).
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::time::{Duration, Instant};

pub const DEFAULT_AUTO_HIDE_DURATION_MS: u64 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// `None` keeps the message up until it is closed.
    pub auto_hide_duration_ms: Option<u64>,
}

/// Owner of the one notification that can be on screen.
///
/// Opening replaces whatever is there; there is no queue.
/// Closing only hides, the last message stays readable.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<Notification>,
    visible: bool,
    opened_at: Option<Instant>,
    default_auto_hide_duration_ms: Option<u64>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        NotificationCenter::with_default_duration(Some(DEFAULT_AUTO_HIDE_DURATION_MS))
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Default::default()
    }

    /// A center whose [`open`](Self::open) uses `auto_hide_duration_ms` instead of 6000 ms.
    pub fn with_default_duration(auto_hide_duration_ms: Option<u64>) -> Self {
        NotificationCenter {
            current: None,
            visible: false,
            opened_at: None,
            default_auto_hide_duration_ms: auto_hide_duration_ms.filter(|ms| *ms > 0),
        }
    }

    /// Show a success message with the default auto-hide delay.
    pub fn open(&mut self, message: impl Into<String>) {
        self.open_with_default(message, Severity::Success);
    }

    /// Show a message with the default auto-hide delay.
    pub fn open_with_default(&mut self, message: impl Into<String>, severity: Severity) {
        let duration = self.default_auto_hide_duration_ms;
        self.open_with(message, severity, duration);
    }

    /// Show a message. A zero duration means no auto-hide.
    pub fn open_with(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        auto_hide_duration_ms: Option<u64>,
    ) {
        self.current = Some(Notification {
            message: message.into(),
            severity,
            auto_hide_duration_ms: auto_hide_duration_ms.filter(|ms| *ms > 0),
        });
        self.visible = true;
        self.opened_at = Some(Instant::now());
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Close the notification if its auto-hide delay has run out by `now`.
    ///
    /// Returns whether it was closed by this call.
    pub fn dismiss_expired(&mut self, now: Instant) -> bool {
        if !self.visible {
            return false;
        }
        let (Some(opened_at), Some(notification)) = (self.opened_at, self.current.as_ref()) else {
            return false;
        };
        let Some(ms) = notification.auto_hide_duration_ms else {
            return false;
        };
        if now.saturating_duration_since(opened_at) >= Duration::from_millis(ms) {
            self.close();
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The last opened notification, shown or not.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// The notification to render, if one is showing.
    pub fn visible_notification(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|_| self.visible)
    }

    pub fn default_auto_hide_duration_ms(&self) -> Option<u64> {
        self.default_auto_hide_duration_ms
    }
}
