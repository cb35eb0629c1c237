// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! Type-safe wrappers for the notification center's tunables, ensuring
//! they always hold values the center can work with.

use std::time::Duration;

// =============================================================================
// Max Visible Bounds
// =============================================================================

/// Visible notification cap bounds (1 to 20 toasts).
pub mod max_visible_bounds {
    /// Minimum number of visible notifications.
    pub const MIN: usize = 1;
    /// Maximum number of visible notifications.
    pub const MAX: usize = 20;
    /// Default number of visible notifications.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// MaxVisible
// =============================================================================

/// Maximum number of notifications shown at once.
///
/// Values outside 1–20 are clamped, so a center can never be configured
/// to show nothing.
///
/// # Example
///
/// ```
/// use toast_center::domain::notifications::MaxVisible;
///
/// assert_eq!(MaxVisible::new(3).value(), 3);
/// assert_eq!(MaxVisible::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new cap, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_visible_bounds::MIN, max_visible_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}

// =============================================================================
// Display Duration
// =============================================================================

/// Default auto-dismiss delay in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// How long a notification stays on screen before auto-dismissing.
///
/// Zero means the notification persists until dismissed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayDuration(u64);

impl DisplayDuration {
    /// A duration that never auto-dismisses.
    pub const PERSISTENT: Self = Self(0);

    /// Creates a duration from milliseconds.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Creates a duration from a signed millisecond count.
    ///
    /// Returns `None` for negative values; they are never coerced.
    #[must_use]
    pub fn try_from_signed_millis(ms: i64) -> Option<Self> {
        u64::try_from(ms).ok().map(Self)
    }

    /// Returns the raw millisecond count.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns whether the notification waits for a manual dismiss.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0 == 0
    }

    /// Returns the delay before auto-dismiss, or `None` when persistent.
    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        (!self.is_persistent()).then(|| Duration::from_millis(self.0))
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(DEFAULT_DURATION_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
