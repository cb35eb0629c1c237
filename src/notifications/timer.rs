// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers.
//!
//! A [`Scheduler`] hands out one cancelable [`TimerHandle`] per timed
//! notification. Fired timers never touch the center directly: they queue
//! the notification id, and the center applies the dismissal when its
//! owner drains the queue. Canceling before that drain always wins.
//!
//! Two schedulers are provided:
//!
//! - [`TokioScheduler`] - real time, one sleeping tokio task per timer
//! - [`ManualScheduler`] - virtual clock advanced by the owner, for tests
//!   and tick-driven UIs

use super::notification::NotificationId;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::{Rc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A scheduled one-shot dismissal that can be canceled.
pub trait TimerHandle {
    /// Cancels the timer. Canceling an already fired timer is a no-op.
    fn cancel(self);
}

/// Source of one-shot dismissal timers.
pub trait Scheduler {
    type Timer: TimerHandle;

    /// Schedules `id` to fire once after `delay`.
    fn schedule(&mut self, id: NotificationId, delay: Duration) -> Self::Timer;

    /// Pops the next fired timer, if any, without waiting.
    fn poll_fired(&mut self) -> Option<NotificationId>;
}

// =============================================================================
// Tokio
// =============================================================================

/// Real-time scheduler backed by tokio tasks.
#[derive(Debug)]
pub struct TokioScheduler {
    handle: Handle,
    fired_tx: mpsc::UnboundedSender<NotificationId>,
    fired_rx: mpsc::UnboundedReceiver<NotificationId>,
}

impl TokioScheduler {
    /// Creates a scheduler on the current tokio runtime.
    pub fn new() -> Result<Self> {
        let handle = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Ok(Self::with_handle(handle))
    }

    /// Creates a scheduler spawning its timers on `handle`.
    #[must_use]
    pub fn with_handle(handle: Handle) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            handle,
            fired_tx,
            fired_rx,
        }
    }

    /// Waits until the next timer fires.
    ///
    /// Pending forever when no timer is outstanding.
    pub async fn fired(&mut self) -> Option<NotificationId> {
        self.fired_rx.recv().await
    }
}

/// Handle to a sleeping tokio task.
#[derive(Debug)]
pub struct TokioTimer(JoinHandle<()>);

impl TimerHandle for TokioTimer {
    fn cancel(self) {
        self.0.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Timer = TokioTimer;

    fn schedule(&mut self, id: NotificationId, delay: Duration) -> TokioTimer {
        let fired_tx = self.fired_tx.clone();
        let deadline = tokio::time::Instant::now() + delay;
        TokioTimer(self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // The receiver lives as long as the scheduler.
            let _ = fired_tx.send(id);
        }))
    }

    fn poll_fired(&mut self) -> Option<NotificationId> {
        self.fired_rx.try_recv().ok()
    }
}

// =============================================================================
// Manual
// =============================================================================

type TimerKey = (Duration, u64);

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    pending: BTreeMap<TimerKey, NotificationId>,
    fired: VecDeque<(u64, NotificationId)>,
}

/// Deterministic scheduler driven by [`advance`](Self::advance).
///
/// Clones share the same clock, so a test can keep one clone while the
/// center owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the virtual clock forward, firing every timer that falls due.
    ///
    /// Timers fire in deadline order, ties in scheduling order.
    pub fn advance(&self, by: Duration) {
        let mut guard = self.clock.borrow_mut();
        let clock = &mut *guard;
        clock.now += by;
        let now = clock.now;
        while let Some(entry) = clock.pending.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let ((_, seq), id) = entry.remove_entry();
            clock.fired.push_back((seq, id));
        }
    }

    /// Returns the elapsed virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Returns the number of timers that have not fired or been canceled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Returns the number of fired timers waiting to be drained.
    #[must_use]
    pub fn fired_count(&self) -> usize {
        self.clock.borrow().fired.len()
    }
}

/// Handle to a timer on a [`ManualScheduler`] clock.
#[derive(Debug)]
pub struct ManualTimer {
    key: TimerKey,
    clock: Weak<RefCell<ManualClock>>,
}

impl TimerHandle for ManualTimer {
    fn cancel(self) {
        let Some(clock) = self.clock.upgrade() else {
            return;
        };
        let mut clock = clock.borrow_mut();
        if clock.pending.remove(&self.key).is_none() {
            // Fired but not drained yet: retract it.
            clock.fired.retain(|(seq, _)| *seq != self.key.1);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Timer = ManualTimer;

    fn schedule(&mut self, id: NotificationId, delay: Duration) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let key = (clock.now + delay, seq);
        clock.pending.insert(key, id);
        ManualTimer {
            key,
            clock: Rc::downgrade(&self.clock),
        }
    }

    fn poll_fired(&mut self) -> Option<NotificationId> {
        self.clock
            .borrow_mut()
            .fired
            .pop_front()
            .map(|(_, id)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ids::SequentialIds;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn manual_timer_fires_at_deadline() {
        let mut scheduler = ManualScheduler::new();
        let id = SequentialIds::nth(1);
        let _timer = scheduler.schedule(id, ms(1000));

        scheduler.advance(ms(999));
        assert_eq!(scheduler.poll_fired(), None);

        scheduler.advance(ms(1));
        assert_eq!(scheduler.poll_fired(), Some(id));
        assert_eq!(scheduler.poll_fired(), None);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn manual_timers_fire_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        let _late = scheduler.schedule(SequentialIds::nth(1), ms(300));
        let _early = scheduler.schedule(SequentialIds::nth(2), ms(100));
        let _tie = scheduler.schedule(SequentialIds::nth(3), ms(100));

        scheduler.advance(ms(500));
        let fired: Vec<_> = std::iter::from_fn(|| scheduler.poll_fired()).collect();
        assert_eq!(
            fired,
            vec![
                SequentialIds::nth(2),
                SequentialIds::nth(3),
                SequentialIds::nth(1)
            ]
        );
    }

    #[test]
    fn canceled_manual_timer_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let timer = scheduler.schedule(SequentialIds::nth(1), ms(10));
        timer.cancel();

        scheduler.advance(ms(100));
        assert_eq!(scheduler.poll_fired(), None);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn cancel_retracts_fired_but_undrained_timer() {
        let mut scheduler = ManualScheduler::new();
        let timer = scheduler.schedule(SequentialIds::nth(1), ms(10));
        scheduler.advance(ms(10));
        assert_eq!(scheduler.fired_count(), 1);

        timer.cancel();
        assert_eq!(scheduler.poll_fired(), None);
    }

    #[test]
    fn clones_share_the_clock() {
        let mut scheduler = ManualScheduler::new();
        let observer = scheduler.clone();
        let _timer = scheduler.schedule(SequentialIds::nth(1), ms(50));

        observer.advance(ms(50));
        assert_eq!(scheduler.now(), ms(50));
        assert_eq!(scheduler.poll_fired(), Some(SequentialIds::nth(1)));
    }

    #[test]
    fn tokio_scheduler_requires_runtime() {
        assert_eq!(TokioScheduler::new().unwrap_err(), Error::NoRuntime);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_fires_after_delay() {
        let mut scheduler = TokioScheduler::new().unwrap();
        let id = SequentialIds::nth(7);
        let start = tokio::time::Instant::now();
        let _timer = scheduler.schedule(id, ms(250));

        assert_eq!(scheduler.fired().await, Some(id));
        assert!(start.elapsed() >= ms(250));
    }

    #[tokio::test(start_paused = true)]
    async fn canceled_tokio_timer_never_fires() {
        let mut scheduler = TokioScheduler::new().unwrap();
        let timer = scheduler.schedule(SequentialIds::nth(1), ms(100));
        timer.cancel();

        tokio::time::sleep(ms(500)).await;
        assert_eq!(scheduler.poll_fired(), None);
    }
}
