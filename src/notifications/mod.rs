// SPDX-License-Identifier: MPL-2.0
//! Toast notification center.
//!
//! Notifications appear temporarily to inform users about outcomes (save
//! success, failed requests, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and `NotificationRequest`
//! - [`center`] - `NotificationCenter` owning the visible list and timers
//! - [`timer`] - cancelable auto-dismiss timers (tokio or virtual clock)
//! - [`ids`] - injectable id generators
//!
//! # Usage
//!
//! ```no_run
//! use toast_center::notifications::{CenterSettings, NotificationCenter, NotificationRequest};
//!
//! # async fn run() -> toast_center::error::Result<()> {
//! let mut center = NotificationCenter::new(CenterSettings::default())?;
//! let mut updates = center.subscribe();
//!
//! let id = center.notify(NotificationRequest::success("Profile saved"))?;
//! assert_eq!(updates.borrow_and_update().len(), 1);
//!
//! // Auto-dismissed after the default five seconds.
//! assert_eq!(center.next_expiry().await, Some(id));
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior
//!
//! - Max visible toasts: 5 by default; the oldest is dropped silently
//! - Default display time: 5s; `0` keeps a toast until dismissed
//! - Dropping the center cancels all outstanding timers

pub mod center;
pub mod ids;
pub mod notification;
pub mod timer;

pub use center::{CenterSettings, Message as NotificationMessage, NotificationCenter};
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use notification::{Action, Notification, NotificationId, NotificationRequest, Severity};
pub use timer::{ManualScheduler, Scheduler, TimerHandle, TokioScheduler};
