// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::domain::notifications::{max_visible_bounds, DEFAULT_DURATION_MS as DOMAIN_DURATION};

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_VISIBLE: usize = max_visible_bounds::DEFAULT;

/// Minimum number of toasts visible at once.
pub const MIN_MAX_VISIBLE: usize = max_visible_bounds::MIN;

/// Maximum number of toasts visible at once.
pub const MAX_MAX_VISIBLE: usize = max_visible_bounds::MAX;

/// Default auto-dismiss delay (in milliseconds). Zero disables auto-dismiss.
pub const DEFAULT_DURATION_MS: u64 = DOMAIN_DURATION;
