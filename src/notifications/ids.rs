// SPDX-License-Identifier: MPL-2.0
//! Identity sources for notifications.
//!
//! The center asks an injected [`IdGenerator`] for every new id, so tests
//! can swap the random default for a predictable sequence.

use super::notification::NotificationId;
use uuid::Uuid;

/// Produces fresh notification ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> NotificationId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> NotificationId {
        NotificationId::from_uuid(Uuid::new_v4())
    }
}

/// Monotonic counter encoded into a UUID, starting at 1.
///
/// Ids are never reused for the lifetime of the generator.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u128,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id the `n`-th call to `next_id` yields (1-based).
    #[must_use]
    pub fn nth(n: u128) -> NotificationId {
        NotificationId::from_uuid(Uuid::from_u128(n))
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> NotificationId {
        self.last += 1;
        Self::nth(self.last)
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> NotificationId,
{
    fn next_id(&mut self) -> NotificationId {
        self()
    }
}
