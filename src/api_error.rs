// SPDX-License-Identifier: MPL-2.0
//! Mapping of failed API calls to error notifications.
//!
//! Callers that talk to a backend normalize whatever came back into an
//! [`ApiError`] and surface it through the notification center.

use crate::notifications::NotificationRequest;
use serde::Deserialize;
use std::fmt;

/// Message used when the response carries none.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

/// Code used when the response carries none.
pub const UNKNOWN_CODE: &str = "UNKNOWN_ERROR";

/// Status used when there was no response at all.
pub const FALLBACK_STATUS: u16 = 500;

/// Error payload a backend may return in its response body.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// A normalized API failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub code: String,
    pub status: u16,
}

impl ApiError {
    /// The error reported when nothing is known about the failure.
    #[must_use]
    pub fn unexpected() -> Self {
        Self {
            message: UNEXPECTED_MESSAGE.to_string(),
            code: UNKNOWN_CODE.to_string(),
            status: FALLBACK_STATUS,
        }
    }

    /// Builds an error from whatever parts of an HTTP response are available.
    ///
    /// Missing or empty fields fall back to the `unexpected()` values.
    #[must_use]
    pub fn from_response(status: Option<u16>, body: Option<ApiErrorBody>) -> Self {
        let body = body.unwrap_or_default();
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            message: non_empty(body.message).unwrap_or_else(|| UNEXPECTED_MESSAGE.to_string()),
            code: non_empty(body.code).unwrap_or_else(|| UNKNOWN_CODE.to_string()),
            status: status.unwrap_or(FALLBACK_STATUS),
        }
    }

    /// Returns an error notification request describing this failure.
    #[must_use]
    pub fn to_notification(&self) -> NotificationRequest {
        NotificationRequest::error(self.message.clone())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, status {})", self.message, self.code, self.status)
    }
}

impl std::error::Error for ApiError {}
