// SPDX-License-Identifier: MPL-2.0
//! One-shot cancellable deferred tasks.
//!
//! A [`Deferred`] holds at most one pending payload together with the instant
//! at which it becomes due. The owner polls it with the current time (usually
//! from the periodic tick subscription) and gets the payload back exactly once.
//! Time is always passed in, so tests drive it with a fake clock.

use std::time::{Duration, Instant};

/// A single pending payload that fires once its deadline has passed.
#[derive(Debug, Clone)]
pub struct Deferred<T> {
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Deferred<T> {
    /// Creates an idle task with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to fire `delay` after `now`.
    ///
    /// Any previously pending payload is discarded.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) {
        self.pending = Some(Pending {
            deadline: now + delay,
            payload,
        });
    }

    /// Cancels the pending payload. Returns `true` if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns the payload if its deadline has been reached, consuming it.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|pending| pending.payload)
            }
            _ => None,
        }
    }

    /// Returns whether a payload is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the instant at which the pending payload becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_idle() {
        let mut task: Deferred<u8> = Deferred::new();
        assert!(!task.is_pending());
        assert!(task.deadline().is_none());
        assert_eq!(task.poll(Instant::now()), None);
    }

    #[test]
    fn fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut task = Deferred::new();
        task.schedule(t0, Duration::from_millis(500), "go");

        assert_eq!(task.poll(t0 + Duration::from_millis(499)), None);
        assert_eq!(task.poll(t0 + Duration::from_millis(500)), Some("go"));
        assert_eq!(task.poll(t0 + Duration::from_secs(10)), None);
        assert!(!task.is_pending());
    }

    #[test]
    fn cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut task = Deferred::new();
        task.schedule(t0, Duration::from_millis(100), 1);

        assert!(task.cancel());
        assert!(!task.cancel());
        assert_eq!(task.poll(t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn rescheduling_replaces_pending_payload() {
        let t0 = Instant::now();
        let mut task = Deferred::new();
        task.schedule(t0, Duration::from_millis(100), 1);
        task.schedule(t0, Duration::from_millis(300), 2);

        assert_eq!(task.deadline(), Some(t0 + Duration::from_millis(300)));
        assert_eq!(task.poll(t0 + Duration::from_millis(200)), None);
        assert_eq!(task.poll(t0 + Duration::from_millis(300)), Some(2));
    }
}
