//! Toast-and-log seam for user-facing failures.
//!
//! # Design
//! - Features report through [`Notifier`] and never touch the toast store directly.
//! - Message composition is pure so it can be tested without a DOM.

use crate::models::ToastKind;
use std::fmt::Display;

/// A user-visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: ToastKind,
    /// Display message.
    pub message: String,
}

/// Sink for notifications; the wasm shell pushes a toast and logs errors.
pub trait Notifier {
    /// Deliver a notice.
    fn notify(&self, notice: Notice);

    /// Show an informational toast.
    fn info(&self, message: &str) {
        self.notify(Notice {
            kind: ToastKind::Info,
            message: message.to_string(),
        });
    }

    /// Show a success toast.
    fn success(&self, message: &str) {
        self.notify(Notice {
            kind: ToastKind::Success,
            message: message.to_string(),
        });
    }

    /// Report a failure with an optional context message and cause.
    fn toast_and_log(&self, message: Option<&str>, cause: Option<&dyn Display>) {
        self.notify(Notice {
            kind: ToastKind::Error,
            message: failure_message(message, cause),
        });
    }
}

/// Compose `"<message>: <cause>"`, falling back to whichever half is present.
#[must_use]
pub fn failure_message(message: Option<&str>, cause: Option<&dyn Display>) -> String {
    match (message, cause) {
        (Some(message), Some(cause)) => format!("{message}: {cause}"),
        (Some(message), None) => message.to_string(),
        (None, Some(cause)) => cause.to_string(),
        (None, None) => "Unexpected error".to_string(),
    }
}
