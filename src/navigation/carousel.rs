// SPDX-License-Identifier: MPL-2.0
//! Bounded slide counter with directional animation, used by onboarding.

use super::Direction;

/// What a call to [`Carousel::next`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselStep {
    /// Moved to the following slide.
    Moved,
    /// Already on the last slide; the owner should complete the sequence.
    Completed,
}

/// Index into a fixed number of slides, always within `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    direction: Direction,
}

impl Carousel {
    /// Creates a carousel positioned on the first of `len` slides.
    ///
    /// `len` is raised to 1 so the index range is never empty.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            direction: Direction::Forward,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }

    /// Whether a "previous" control should be offered.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// Advances one slide, or reports completion on the last one.
    pub fn next(&mut self) -> CarouselStep {
        if self.is_last() {
            CarouselStep::Completed
        } else {
            self.direction = Direction::Forward;
            self.index += 1;
            CarouselStep::Moved
        }
    }

    /// Steps back one slide. No-op on the first slide; returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.direction = Direction::Backward;
        self.index -= 1;
        true
    }

    /// Jumps straight to `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.direction = Direction::between(self.index, index);
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_is_noop_on_first_slide() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.can_go_back());
        assert!(!carousel.previous());
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn next_on_last_slide_completes_without_moving() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.next(), CarouselStep::Moved);
        assert_eq!(carousel.next(), CarouselStep::Moved);
        assert!(carousel.is_last());

        assert_eq!(carousel.next(), CarouselStep::Completed);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn previous_animates_backward() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        assert!(carousel.previous());
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn jump_sets_direction_by_comparison() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.jump_to(2));
        assert_eq!(carousel.direction(), Direction::Forward);
        assert!(carousel.jump_to(1));
        assert_eq!(carousel.direction(), Direction::Backward);
        assert!(carousel.jump_to(1));
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.jump_to(3));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn zero_length_is_treated_as_single_slide() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.next(), CarouselStep::Completed);
    }
}
