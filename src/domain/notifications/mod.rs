// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! - [`MaxVisible`]: Cap on simultaneously visible notifications
//! - [`DisplayDuration`]: Auto-dismiss delay (zero = persistent)

mod newtypes;

pub use newtypes::{max_visible_bounds, DisplayDuration, MaxVisible, DEFAULT_DURATION_MS};
