// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum and
//! the `NotificationRequest` callers hand to the center.

use crate::domain::notifications::DisplayDuration;
use crate::error::InvalidInput;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Wraps an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully.
    Success,
    /// Error requiring attention.
    Error,
    /// Warning that doesn't block operation.
    Warning,
    /// Informational message.
    #[default]
    Info,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Returns the lowercase name used in configs and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidInput::UnknownSeverity(s.to_string()))
    }
}

/// A labelled button shown on a toast.
///
/// The callback only runs when the user presses the button; the center
/// never invokes it on its own.
#[derive(Clone)]
pub struct Action {
    label: String,
    on_click: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
    pub fn new(label: impl Into<String>, on_click: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            on_click: Arc::new(on_click),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn invoke(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Options for a new notification, validated by
/// [`NotificationCenter::notify`](super::NotificationCenter::notify).
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    pub message: String,
    pub severity: Severity,
    /// Display time in milliseconds. `None` uses the center's default,
    /// `Some(0)` persists until dismissed.
    pub duration_ms: Option<i64>,
    pub action: Option<Action>,
}

impl NotificationRequest {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            duration_ms: None,
            action: None,
        }
    }

    /// Creates a success request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info request.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets a custom display time, overriding the center default.
    #[must_use]
    pub fn duration_ms(mut self, ms: i64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Keeps the notification until it is dismissed explicitly.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration_ms(0)
    }

    /// Attaches an action button.
    #[must_use]
    pub fn with_action(
        mut self,
        label: impl Into<String>,
        on_click: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.action = Some(Action::new(label, on_click));
        self
    }

    /// Checks the request and resolves its display duration.
    pub(crate) fn validate(
        &self,
        default_duration: DisplayDuration,
    ) -> Result<DisplayDuration, InvalidInput> {
        if self.message.trim().is_empty() {
            return Err(InvalidInput::EmptyMessage);
        }
        match self.duration_ms {
            None => Ok(default_duration),
            Some(ms) => DisplayDuration::try_from_signed_millis(ms)
                .ok_or(InvalidInput::NegativeDuration(ms)),
        }
    }
}

/// A notification currently owned by the center.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    duration: DisplayDuration,
    action: Option<Action>,
    created_at: DateTime<Utc>,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        request: NotificationRequest,
        duration: DisplayDuration,
    ) -> Self {
        Self {
            id,
            severity: request.severity,
            message: request.message,
            duration,
            action: request.action,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the display time this notification was created with.
    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Returns when this notification was created (wall clock).
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
