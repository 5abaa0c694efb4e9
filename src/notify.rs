//! Single-slot notification scheduler
//!
//! Holds at most one user-facing message. Showing a message replaces the
//! previous one and re-arms its auto-hide task; the task lives in the
//! scheduler's own state and fires when the owner polls past its deadline.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// Get the title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    /// When the message was shown
    pub shown_at: Instant,
    /// `None` for sticky messages
    pub duration: Option<Duration>,
    pub visible: bool,
}

impl Notification {
    /// Sticky messages stay until replaced or hidden
    pub fn is_sticky(&self) -> bool {
        self.duration.is_none()
    }
}

/// Pending auto-hide task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AutoHide {
    generation: u64,
    deadline: Instant,
}

/// Single-slot, time-bounded message queue
#[derive(Debug)]
pub struct NotificationScheduler {
    current: Option<Notification>,
    timer: Option<AutoHide>,
    /// Bumped on every `show`, so a timer armed for an older message never
    /// matches the current one
    generation: u64,
    default_duration: Duration,
}

impl Default for NotificationScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

impl NotificationScheduler {
    /// Create a scheduler whose convenience helpers use `default_duration`
    pub fn new(default_duration: Duration) -> Self {
        Self {
            current: None,
            timer: None,
            generation: 0,
            default_duration,
        }
    }

    /// Show a message; `duration_ms == 0` keeps it until replaced or hidden
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationType, duration_ms: u64) {
        self.show_at(Instant::now(), message, kind, duration_ms);
    }

    /// Like [`show`](Self::show) with an explicit current time
    pub fn show_at(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        kind: NotificationType,
        duration_ms: u64,
    ) {
        self.timer = None;
        self.generation += 1;

        let duration = (duration_ms > 0).then(|| Duration::from_millis(duration_ms));
        let message = message.into();
        tracing::debug!(kind = ?kind, sticky = duration.is_none(), "notify: {}", message);

        self.current = Some(Notification {
            message,
            notification_type: kind,
            shown_at: now,
            duration,
            visible: true,
        });

        if let Some(duration) = duration {
            self.timer = Some(AutoHide {
                generation: self.generation,
                deadline: now + duration,
            });
        }
    }

    /// Hide the current message and cancel its timer; idempotent
    pub fn hide(&mut self) {
        self.timer = None;
        if let Some(current) = self.current.as_mut() {
            current.visible = false;
        }
    }

    /// Fire the auto-hide task if it is due
    ///
    /// Returns `true` if this call hid the message.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.timer {
            Some(timer) if timer.generation == self.generation && now >= timer.deadline => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    /// Fire the auto-hide task if it is due at the current time
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// The visible message, if any
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.visible)
    }

    /// Whether an auto-hide task is pending
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    fn default_ms(&self) -> u64 {
        u64::try_from(self.default_duration.as_millis()).unwrap_or(u64::MAX)
    }

    /// Show a warning for the default duration
    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(message, NotificationType::Warning, self.default_ms());
    }

    /// Show a success message for the default duration
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, NotificationType::Success, self.default_ms());
    }

    /// Show an error message for the default duration
    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, NotificationType::Error, self.default_ms());
    }

    /// Show an error message that stays until replaced or hidden
    pub fn sticky_error(&mut self, message: impl Into<String>) {
        self.show(message, NotificationType::Error, 0);
    }
}
