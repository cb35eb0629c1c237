// SPDX-License-Identifier: MPL-2.0
//! `toast_center` is a bounded toast notification center.
//!
//! It keeps the currently visible notifications, enforces a cap on how many
//! are shown, dismisses them after a per-notification delay and publishes
//! every change to a rendering layer.

pub mod api_error;
pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod paths;
