// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot timer value.
//!
//! Every timed UI behavior (theme transition marker, scroll pulse clear,
//! copy confirmation, success banner, tour highlight, validation debounce)
//! goes through a `Deadline` instead of an ad-hoc timeout handle. Scheduling
//! replaces any pending deadline, so "cancel before reschedule" is enforced
//! structurally rather than by call-site discipline.
//!
//! Deadlines are polled from the periodic tick subscription: call
//! [`Deadline::fire`] with the current instant and react when it returns
//! `true` (it returns `true` exactly once per scheduled deadline).

use std::time::{Duration, Instant};

/// A one-shot deadline that can be pending or idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// Creates an idle deadline.
    #[must_use]
    pub fn idle() -> Self {
        Self(None)
    }

    /// Schedules the deadline `after` from `now`, replacing any pending one.
    pub fn schedule(&mut self, now: Instant, after: Duration) {
        self.0 = Some(now + after);
    }

    /// Cancels the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.0 = None;
    }

    /// Returns whether a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` once when the deadline has expired, clearing it.
    ///
    /// Returns `false` while still pending or when idle.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.0 {
            Some(at) if now >= at => {
                self.0 = None;
                true
            }
            _ => false,
        }
    }
}
