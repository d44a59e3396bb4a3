//! User-facing notification gateway

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// How long a notification stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastMode {
    /// Stays until the user dismisses it or a timeout elapses
    #[default]
    Dismissable,
    /// Stays until the user dismisses it
    Sticky,
}

/// A user-visible status message
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub mode: ToastMode,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Success,
            mode: ToastMode::Dismissable,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
            mode: ToastMode::Dismissable,
        }
    }

    pub fn sticky(mut self) -> Self {
        self.mode = ToastMode::Sticky;
        self
    }
}

/// Sink for user-visible status messages.
///
/// Fire-and-forget: the listing never inspects a result of delivery.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}
