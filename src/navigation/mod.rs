// SPDX-License-Identifier: MPL-2.0
//! Screen navigation state machine.
//!
//! The transition decision is a pure function ([`decide`]) over
//! [`NavigationState`]. [`Navigator`] wraps it with the one time-driven rule:
//! while on [`Screen::Splash`] a dwell task fires once and moves to
//! [`Screen::Onboarding`], unless the user navigated away first.
//!
//! Animation is not decided here. The view layer keys a [`SlideTransition`]
//! off changes of [`NavigationState::current`].

mod carousel;
mod screen;
mod transition;

pub use carousel::{Carousel, CarouselStep};
pub use screen::Screen;
pub use transition::{ease_in_out, LayerFrame, SlideFrame, SlideTransition};

use crate::deferred::Deferred;
use std::time::{Duration, Instant};

/// Horizontal animation direction of the most recent transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `+1` for forward, `-1` for backward.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Direction for moving from index `from` to index `to`.
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Current screen plus the direction the last transition should animate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current: Screen,
    pub direction: Direction,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: Screen::Splash,
            direction: Direction::Forward,
        }
    }
}

/// A request to show `target`, animated in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: Screen,
    pub direction: Direction,
}

impl NavigationRequest {
    /// Forward request, the direction used by every in-app navigation.
    #[must_use]
    pub fn forward(target: Screen) -> Self {
        Self {
            target,
            direction: Direction::Forward,
        }
    }
}

/// Pure transition function. Every screen is reachable from every screen.
#[must_use]
pub fn decide(_state: NavigationState, request: NavigationRequest) -> NavigationState {
    NavigationState {
        current: request.target,
        direction: request.direction,
    }
}

/// Result of applying a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub previous: Screen,
    pub state: NavigationState,
}

impl NavigationOutcome {
    /// Returns `true` if the current screen actually changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.state.current
    }
}

/// Owns the navigation state and the splash dwell task.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavigationState,
    dwell: Deferred<Screen>,
    dwell_duration: Duration,
}

impl Navigator {
    /// Creates a navigator pinned to [`Screen::Splash`] and schedules the
    /// automatic advance to onboarding `dwell_duration` after `now`.
    #[must_use]
    pub fn new(now: Instant, dwell_duration: Duration) -> Self {
        let mut navigator = Self {
            state: NavigationState::default(),
            dwell: Deferred::new(),
            dwell_duration,
        };
        navigator.enter(Screen::Splash, now);
        navigator
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn current(&self) -> Screen {
        self.state.current
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Whether the bottom navigation bar is visible on the current screen.
    #[must_use]
    pub fn shows_bottom_nav(&self) -> bool {
        self.state.current.shows_bottom_nav()
    }

    /// Navigates forward to `target`.
    pub fn navigate(&mut self, target: Screen, now: Instant) -> NavigationOutcome {
        self.apply(NavigationRequest::forward(target), now)
    }

    /// Applies an arbitrary request through [`decide`].
    pub fn apply(&mut self, request: NavigationRequest, now: Instant) -> NavigationOutcome {
        let previous = self.state.current;
        self.state = decide(self.state, request);

        if previous != self.state.current {
            self.leave(previous);
            self.enter(self.state.current, now);
            tracing::debug!(
                from = %previous,
                to = %self.state.current,
                direction = self.state.direction.sign(),
                "navigation"
            );
        }

        NavigationOutcome {
            previous,
            state: self.state,
        }
    }

    /// Fires the splash dwell if it is due. Returns the outcome when it fired.
    pub fn tick(&mut self, now: Instant) -> Option<NavigationOutcome> {
        let target = self.dwell.poll(now)?;
        if self.state.current != Screen::Splash {
            // Only reachable if the dwell outlived its screen; never override.
            tracing::warn!(current = %self.state.current, "stale splash dwell dropped");
            return None;
        }
        tracing::debug!("splash dwell elapsed");
        Some(self.navigate(target, now))
    }

    /// Cancels pending deferred work. Call when the app shuts down.
    pub fn teardown(&mut self) {
        if self.dwell.cancel() {
            tracing::trace!("splash dwell cancelled on teardown");
        }
    }

    /// Whether the splash dwell is still waiting to fire.
    #[must_use]
    pub fn has_pending_dwell(&self) -> bool {
        self.dwell.is_pending()
    }

    fn enter(&mut self, screen: Screen, now: Instant) {
        if screen == Screen::Splash {
            self.dwell
                .schedule(now, self.dwell_duration, Screen::Onboarding);
        }
    }

    fn leave(&mut self, screen: Screen) {
        if screen == Screen::Splash && self.dwell.cancel() {
            tracing::trace!("splash dwell cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DWELL: Duration = Duration::from_millis(2500);

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn starts_on_splash() {
        let nav = Navigator::new(Instant::now(), DWELL);
        assert_eq!(nav.current(), Screen::Splash);
        assert_eq!(nav.direction(), Direction::Forward);
        assert!(nav.has_pending_dwell());
        assert!(!nav.shows_bottom_nav());
    }

    #[test]
    fn dwell_advances_to_onboarding_exactly_once() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(t0, DWELL);

        assert!(nav.tick(at(t0, 2499)).is_none());
        assert_eq!(nav.current(), Screen::Splash);

        let outcome = nav.tick(at(t0, 2500)).expect("dwell should fire");
        assert_eq!(outcome.previous, Screen::Splash);
        assert_eq!(nav.current(), Screen::Onboarding);

        assert!(nav.tick(at(t0, 10_000)).is_none());
        assert_eq!(nav.current(), Screen::Onboarding);
    }

    #[test]
    fn manual_navigation_cancels_dwell() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(t0, DWELL);

        nav.navigate(Screen::Home, at(t0, 1000));
        assert!(!nav.has_pending_dwell());

        assert!(nav.tick(at(t0, 2500)).is_none());
        assert!(nav.tick(at(t0, 60_000)).is_none());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn re_entering_splash_schedules_a_fresh_dwell() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(t0, DWELL);
        nav.navigate(Screen::Login, at(t0, 100));
        nav.navigate(Screen::Splash, at(t0, 1000));

        assert!(nav.tick(at(t0, 2600)).is_none());
        assert!(nav.tick(at(t0, 3500)).is_some());
        assert_eq!(nav.current(), Screen::Onboarding);
    }

    #[test]
    fn navigating_to_splash_while_on_splash_keeps_original_deadline() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(t0, DWELL);
        let outcome = nav.navigate(Screen::Splash, at(t0, 2000));

        assert!(!outcome.changed());
        assert!(nav.tick(at(t0, 2500)).is_some());
    }

    #[test]
    fn teardown_cancels_dwell() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(t0, DWELL);
        nav.teardown();
        assert!(nav.tick(at(t0, 5000)).is_none());
        assert_eq!(nav.current(), Screen::Splash);
    }

    #[test]
    fn transition_function_is_total() {
        let t0 = Instant::now();
        for from in Screen::ALL {
            for target in Screen::ALL {
                let mut nav = Navigator::new(t0, DWELL);
                nav.navigate(from, t0);
                let outcome = nav.navigate(target, t0);
                assert_eq!(nav.current(), target, "{from} -> {target}");
                assert_eq!(outcome.state.current, target);
                assert_eq!(nav.direction(), Direction::Forward);
                assert_eq!(nav.shows_bottom_nav(), target.shows_bottom_nav());
            }
        }
    }

    #[test]
    fn decide_is_pure_and_honours_request_direction() {
        let state = NavigationState {
            current: Screen::Camera,
            direction: Direction::Forward,
        };
        let request = NavigationRequest {
            target: Screen::Home,
            direction: Direction::Backward,
        };
        let first = decide(state, request);
        let second = decide(state, request);

        assert_eq!(first, second);
        assert_eq!(first.current, Screen::Home);
        assert_eq!(first.direction.sign(), -1);
        assert_eq!(state.current, Screen::Camera);
    }

    #[test]
    fn direction_between_indices() {
        assert_eq!(Direction::between(0, 2), Direction::Forward);
        assert_eq!(Direction::between(2, 0), Direction::Backward);
        assert_eq!(Direction::between(1, 1), Direction::Backward);
    }
}
