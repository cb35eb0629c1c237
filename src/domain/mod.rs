// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`notifications`]: Notification center tunables
//!   ([`MaxVisible`](notifications::MaxVisible),
//!   [`DisplayDuration`](notifications::DisplayDuration))

pub mod notifications;
