// SPDX-License-Identifier: MPL-2.0
//! Directional slide animation keyed off a changing value.
//!
//! The incoming layer starts at `direction * distance` (as a fraction of the
//! available width) with zero opacity and settles at offset zero, full
//! opacity. The outgoing layer moves toward `-direction * distance` while
//! fading out. Both follow the same ease-in-out curve.

use super::Direction;
use std::time::{Duration, Instant};

/// Cubic ease-in-out on `t` clamped to `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Placement of one layer for a single animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerFrame {
    /// Horizontal offset as a fraction of the container width.
    pub offset: f32,
    pub opacity: f32,
}

impl LayerFrame {
    pub const SETTLED: LayerFrame = LayerFrame {
        offset: 0.0,
        opacity: 1.0,
    };
}

/// Both layers of a running transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub incoming: LayerFrame,
    /// `None` once the outgoing layer has been unmounted.
    pub outgoing: Option<LayerFrame>,
}

/// A slide from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition<K> {
    pub from: K,
    pub to: K,
    pub direction: Direction,
    started_at: Instant,
    duration: Duration,
    distance: f32,
}

impl<K: Copy> SlideTransition<K> {
    /// Starts a transition at `now`.
    ///
    /// `distance` is the entry/exit offset as a fraction of the width
    /// (1.0 for full-screen slides).
    #[must_use]
    pub fn begin(
        from: K,
        to: K,
        direction: Direction,
        now: Instant,
        duration: Duration,
        distance: f32,
    ) -> Self {
        Self {
            from,
            to,
            direction,
            started_at: now,
            duration,
            distance,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Layer placement at `now`.
    #[must_use]
    pub fn frame(&self, now: Instant) -> SlideFrame {
        if self.is_finished(now) {
            return SlideFrame {
                incoming: LayerFrame::SETTLED,
                outgoing: None,
            };
        }

        let eased = ease_in_out(self.progress(now));
        let sign = f32::from(self.direction.sign());

        SlideFrame {
            incoming: LayerFrame {
                offset: sign * self.distance * (1.0 - eased),
                opacity: eased,
            },
            outgoing: Some(LayerFrame {
                offset: -sign * self.distance * eased,
                opacity: 1.0 - eased,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(300);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert!(approx(ease_in_out(0.0), 0.0));
        assert!(approx(ease_in_out(0.5), 0.5));
        assert!(approx(ease_in_out(1.0), 1.0));
        assert!(approx(ease_in_out(-3.0), 0.0));
        assert!(approx(ease_in_out(4.0), 1.0));
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn forward_slide_enters_from_the_right() {
        let t0 = Instant::now();
        let slide = SlideTransition::begin(0, 1, Direction::Forward, t0, DURATION, 1.0);
        let frame = slide.frame(t0);

        assert!(approx(frame.incoming.offset, 1.0));
        assert!(approx(frame.incoming.opacity, 0.0));
        let outgoing = frame.outgoing.expect("outgoing layer present");
        assert!(approx(outgoing.offset, 0.0));
        assert!(approx(outgoing.opacity, 1.0));
    }

    #[test]
    fn backward_slide_mirrors_offsets() {
        let t0 = Instant::now();
        let slide = SlideTransition::begin(1, 0, Direction::Backward, t0, DURATION, 0.5);
        let frame = slide.frame(t0 + Duration::from_millis(150));

        assert!(approx(frame.incoming.offset, -0.25));
        let outgoing = frame.outgoing.expect("outgoing layer present");
        assert!(approx(outgoing.offset, 0.25));
    }

    #[test]
    fn finished_slide_unmounts_outgoing_layer() {
        let t0 = Instant::now();
        let slide = SlideTransition::begin('a', 'b', Direction::Forward, t0, DURATION, 1.0);

        assert!(!slide.is_finished(t0 + Duration::from_millis(299)));
        assert!(slide.is_finished(t0 + DURATION));

        let frame = slide.frame(t0 + Duration::from_secs(1));
        assert_eq!(frame.incoming, LayerFrame::SETTLED);
        assert!(frame.outgoing.is_none());
    }

    #[test]
    fn zero_duration_is_immediately_finished() {
        let t0 = Instant::now();
        let slide = SlideTransition::begin(0, 1, Direction::Forward, t0, Duration::ZERO, 1.0);
        assert!(slide.is_finished(t0));
    }
}
