// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationCenter` owns the visible notifications, caps how many
//! are shown at once and tracks one auto-dismiss timer per timed
//! notification. All mutation happens through `&mut self` on the owner's
//! thread; fired timers are applied when the owner drains them.

use super::ids::{IdGenerator, RandomIds};
use super::notification::{Notification, NotificationId, NotificationRequest, Severity};
use super::timer::{Scheduler, TimerHandle, TokioScheduler};
use crate::domain::notifications::{DisplayDuration, MaxVisible};
use crate::error::{Error, Result};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Tunables for a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CenterSettings {
    /// Oldest notifications are evicted beyond this count.
    pub max_visible: MaxVisible,
    /// Used when a request carries no explicit duration.
    pub default_duration: DisplayDuration,
}

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Dismiss everything.
    DismissAll,
    /// The user pressed the action button of a notification.
    ActionPressed(NotificationId),
    /// The auto-dismiss timer of a notification fired.
    TimerFired(NotificationId),
}

/// Owns the visible notifications and their auto-dismiss timers.
///
/// Dropping the center cancels every outstanding timer.
pub struct NotificationCenter<S: Scheduler = TokioScheduler> {
    settings: CenterSettings,
    /// Currently visible notifications (oldest first).
    visible: VecDeque<Notification>,
    /// Timers that have neither fired nor been canceled.
    timers: HashMap<NotificationId, S::Timer>,
    ids: Box<dyn IdGenerator + Send>,
    scheduler: S,
    publisher: watch::Sender<Vec<Notification>>,
}

impl NotificationCenter<TokioScheduler> {
    /// Creates a center on the current tokio runtime with random ids.
    pub fn new(settings: CenterSettings) -> Result<Self> {
        Ok(Self::with_scheduler(settings, TokioScheduler::new()?, RandomIds))
    }

    /// Waits for the next auto-dismiss timer, applies it and returns the id.
    ///
    /// Pending forever while no timer is outstanding; check
    /// [`pending_timers`](Self::pending_timers) or race it in `select!`.
    pub async fn next_expiry(&mut self) -> Option<NotificationId> {
        loop {
            let id = self.scheduler.fired().await?;
            if self.on_timer_fired(id).is_some() {
                return Some(id);
            }
        }
    }
}

impl<S: Scheduler> NotificationCenter<S> {
    /// Creates a center with an explicit scheduler and id source.
    pub fn with_scheduler(
        settings: CenterSettings,
        scheduler: S,
        ids: impl IdGenerator + Send + 'static,
    ) -> Self {
        let (publisher, _) = watch::channel(Vec::new());
        Self {
            settings,
            visible: VecDeque::with_capacity(settings.max_visible.value()),
            timers: HashMap::new(),
            ids: Box::new(ids),
            scheduler,
            publisher,
        }
    }

    /// Shows a new notification and returns its id.
    ///
    /// Invalid requests are rejected before anything changes. When the cap
    /// is exceeded the oldest visible notification is dropped silently; its
    /// timer, if any, later fires as a no-op.
    pub fn notify(&mut self, request: NotificationRequest) -> Result<NotificationId> {
        let (id, duration) = self.admit(&request)?;
        self.insert(id, duration, request);
        Ok(id)
    }

    /// Dismisses `old` and shows `request` in its place.
    ///
    /// `old` is left untouched if the request is rejected.
    pub fn replace(
        &mut self,
        old: NotificationId,
        request: NotificationRequest,
    ) -> Result<NotificationId> {
        let (id, duration) = self.admit(&request)?;
        self.dismiss(old);
        self.insert(id, duration, request);
        Ok(id)
    }

    /// Dismisses a notification by its ID.
    ///
    /// Cancels its timer if one is pending. Unknown ids are ignored.
    /// Returns `true` if a visible notification was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(timer) = self.timers.remove(&id) {
            timer.cancel();
        }
        let removed = self.remove_visible(id);
        if removed {
            debug!(%id, "notification dismissed");
            self.publish();
        }
        removed
    }

    /// Clears all notifications and cancels every pending timer.
    pub fn dismiss_all(&mut self) {
        self.cancel_timers();
        if !self.visible.is_empty() {
            debug!(count = self.visible.len(), "all notifications dismissed");
            self.visible.clear();
            self.publish();
        }
    }

    /// Runs the action callback of a visible notification.
    ///
    /// The notification stays visible. Returns `false` when the id is
    /// unknown or has no action.
    pub fn trigger_action(&self, id: NotificationId) -> bool {
        match self.get(id).and_then(Notification::action) {
            Some(action) => {
                debug!(%id, label = action.label(), "notification action pressed");
                action.invoke();
                true
            }
            None => false,
        }
    }

    /// Applies every timer that has fired since the last call.
    ///
    /// Returns the number of notifications auto-dismissed.
    pub fn process_fired(&mut self) -> usize {
        let mut dismissed = 0;
        while let Some(id) = self.scheduler.poll_fired() {
            if self.on_timer_fired(id) == Some(true) {
                dismissed += 1;
            }
        }
        dismissed
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::DismissAll => self.dismiss_all(),
            Message::ActionPressed(id) => {
                self.trigger_action(*id);
            }
            Message::TimerFired(id) => {
                self.on_timer_fired(*id);
            }
        }
    }

    /// Returns a receiver observing the visible list.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.publisher.subscribe()
    }

    /// Returns the currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether any notification is visible.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Returns the number of timers still outstanding.
    ///
    /// Includes timers of evicted notifications that have not fired yet.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Looks up a visible notification.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn settings(&self) -> CenterSettings {
        self.settings
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Validates a request and reserves a fresh id for it.
    fn admit(
        &mut self,
        request: &NotificationRequest,
    ) -> Result<(NotificationId, DisplayDuration)> {
        let duration = request.validate(self.settings.default_duration)?;
        let id = self.ids.next_id();
        if self.timers.contains_key(&id) || self.get(id).is_some() {
            return Err(Error::DuplicateId(id));
        }
        Ok((id, duration))
    }

    fn insert(
        &mut self,
        id: NotificationId,
        duration: DisplayDuration,
        request: NotificationRequest,
    ) {
        match request.severity {
            Severity::Warning | Severity::Error => {
                warn!(
                    %id,
                    severity = %request.severity,
                    message = %request.message,
                    "notification raised"
                );
            }
            Severity::Success | Severity::Info => {
                debug!(%id, severity = %request.severity, "notification raised");
            }
        }

        if let Some(delay) = duration.auto_dismiss_after() {
            let timer = self.scheduler.schedule(id, delay);
            self.timers.insert(id, timer);
        }
        self.visible.push_back(Notification::new(id, request, duration));
        self.evict_overflow();
        self.publish();
    }

    /// Drops the oldest visible notifications until the cap holds.
    fn evict_overflow(&mut self) {
        let cap = self.settings.max_visible.value();
        while self.visible.len() > cap {
            let Some(evicted) = self.visible.pop_front() else {
                break;
            };
            debug!(id = %evicted.id(), "notification evicted");
        }
    }

    /// Applies a fired timer.
    ///
    /// Returns `None` if the timer was already canceled, otherwise whether
    /// a visible notification was removed.
    fn on_timer_fired(&mut self, id: NotificationId) -> Option<bool> {
        self.timers.remove(&id)?;
        let removed = self.remove_visible(id);
        if removed {
            debug!(%id, "notification auto-dismissed");
            self.publish();
        }
        Some(removed)
    }

    fn remove_visible(&mut self, id: NotificationId) -> bool {
        match self.visible.iter().position(|n| n.id() == id) {
            Some(pos) => self.visible.remove(pos).is_some(),
            None => false,
        }
    }

    fn cancel_timers(&mut self) {
        if !self.timers.is_empty() {
            debug!(count = self.timers.len(), "canceling notification timers");
        }
        for (_, timer) in self.timers.drain() {
            timer.cancel();
        }
    }

    fn publish(&self) {
        self.publisher.send_replace(self.visible.iter().cloned().collect());
    }
}

impl<S: Scheduler> Drop for NotificationCenter<S> {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

impl<S: Scheduler> fmt::Debug for NotificationCenter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("settings", &self.settings)
            .field("visible", &self.visible)
            .field("pending_timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}
