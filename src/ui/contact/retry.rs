// SPDX-License-Identifier: MPL-2.0
//! Submission retry policy.
//!
//! Retries are a first-class value rather than logic buried in the submit
//! handler: the policy answers "retry after this attempt?" and "how long to
//! wait?", and the update loop drives the schedule from those answers.

use std::time::Duration;

/// Bounded retry with exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts allowed, including the first.
    pub max_attempts: u8,
    /// Delay before the second attempt; later delays double each time.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Whether another attempt is allowed after `attempt` (1-based) failed.
    #[must_use]
    pub fn should_retry(&self, attempt: u8) -> bool {
        attempt < self.max_attempts
    }

    /// Backoff before the attempt following `attempt` (1-based).
    ///
    /// Attempt 1 waits `base_delay`, attempt 2 waits twice that, and so on.
    #[must_use]
    pub fn delay_after(&self, attempt: u8) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay * 2u32.pow(u32::from(exponent))
    }
}
