// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always routed. The periodic tick only runs while
//! something needs it: at frame rate during animations, slower while a
//! deferred task is waiting.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick period while a slide or the splash pulse is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Tick period while only deferred tasks are pending.
const TIMER_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window resize and close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Creates the periodic tick subscription.
pub fn create_tick_subscription(animating: bool, timers_pending: bool) -> Subscription<Message> {
    match tick_interval(animating, timers_pending) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn tick_interval(animating: bool, timers_pending: bool) -> Option<Duration> {
    if animating {
        Some(FRAME_INTERVAL)
    } else if timers_pending {
        Some(TIMER_INTERVAL)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_app_does_not_tick() {
        assert_eq!(tick_interval(false, false), None);
    }

    #[test]
    fn animation_wins_over_timers() {
        assert_eq!(tick_interval(true, true), Some(FRAME_INTERVAL));
        assert_eq!(tick_interval(false, true), Some(TIMER_INTERVAL));
    }
}
