use std::time::{Duration, Instant};

const INFO_DURATION: Duration = Duration::from_millis(2500);
const ERROR_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

/// At most one notice at a time; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.show_with_level(message, NotificationLevel::Info);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.show_with_level(message, NotificationLevel::Warning);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show_with_level(message, NotificationLevel::Error);
    }

    fn show_with_level(&mut self, message: impl Into<String>, level: NotificationLevel) {
        let duration = match level {
            NotificationLevel::Info => INFO_DURATION,
            NotificationLevel::Warning | NotificationLevel::Error => ERROR_DURATION,
        };
        self.current = Some(Notification {
            message: message.into(),
            level,
            shown_at: Instant::now(),
            duration,
        });
    }

    /// Current notice, dropping it first if it has expired
    pub fn current(&mut self) -> Option<&Notification> {
        self.expire(Instant::now());
        self.current.as_ref()
    }

    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
