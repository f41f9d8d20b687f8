//! Slide navigator: the bounded slide index and the transition lock.
//!
//! The navigator only decides *whether* and *where* to move. Building and
//! running the visual sequence is the presentation's job; it calls
//! `begin` before playing a sequence and `complete` (or `abort`) afterwards.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Forward iff the target ordinal is greater than the source ordinal.
    pub fn between(from: u32, to: u32) -> Self {
        if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Horizontal offset the outgoing slide travels to.
    pub fn exit_offset(self, travel: f32) -> f32 {
        match self {
            Direction::Forward => -travel,
            Direction::Backward => travel,
        }
    }

    /// Horizontal offset the incoming slide starts from.
    pub fn entry_offset(self, travel: f32) -> f32 {
        -self.exit_offset(travel)
    }
}

/// A granted move from one slide to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: u32,
    pub to: u32,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: u32,
    total: u32,
    animating: bool,
}

impl Navigator {
    /// Start on slide 1. `total` is clamped to at least one slide.
    pub fn new(total: u32) -> Self {
        Self {
            current: 1,
            total: total.max(1),
            animating: false,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.total
    }

    pub fn contains(&self, ordinal: u32) -> bool {
        (1..=self.total).contains(&ordinal)
    }

    /// Target of `advance`, if one is allowed right now.
    pub fn next_target(&self) -> Option<u32> {
        (!self.animating && !self.is_last()).then(|| self.current + 1)
    }

    /// Target of `retreat`, if one is allowed right now.
    pub fn prev_target(&self) -> Option<u32> {
        (!self.animating && !self.is_first()).then(|| self.current - 1)
    }

    /// Target of `jump_to(n)`, if one is allowed right now.
    pub fn jump_target(&self, ordinal: u32) -> Option<u32> {
        (!self.animating && self.contains(ordinal)).then_some(ordinal)
    }

    /// Acquire the lock for a move to `target`.
    ///
    /// Returns `None` (and leaves state untouched) when already locked or when
    /// `target` is out of range.
    pub fn begin(&mut self, target: u32) -> Option<Transition> {
        if self.animating || !self.contains(target) {
            return None;
        }
        self.animating = true;
        Some(Transition {
            from: self.current,
            to: target,
            direction: Direction::between(self.current, target),
        })
    }

    /// Release the lock without moving.
    pub fn abort(&mut self) {
        self.animating = false;
    }

    /// Settle on `target` and release the lock. Ignored when no transition is in flight.
    pub fn complete(&mut self, target: u32) -> bool {
        if !self.animating || !self.contains(target) {
            return false;
        }
        self.current = target;
        self.animating = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_block_targets() {
        let nav = Navigator::new(12);
        assert_eq!(nav.prev_target(), None);
        assert_eq!(nav.next_target(), Some(2));
        assert_eq!(nav.jump_target(0), None);
        assert_eq!(nav.jump_target(13), None);
        assert_eq!(nav.jump_target(12), Some(12));
    }

    #[test]
    fn lock_blocks_everything() {
        let mut nav = Navigator::new(12);
        let t = nav.begin(5).unwrap();
        assert_eq!(t.direction, Direction::Forward);
        assert!(nav.begin(6).is_none());
        assert_eq!(nav.next_target(), None);
        assert_eq!(nav.jump_target(1), None);
        assert!(nav.complete(5));
        assert_eq!(nav.current(), 5);
        assert!(!nav.is_animating());
        assert!(!nav.complete(6));
    }

    #[test]
    fn direction_offsets() {
        assert_eq!(Direction::between(1, 5).exit_offset(100.0), -100.0);
        assert_eq!(Direction::between(1, 5).entry_offset(100.0), 100.0);
        assert_eq!(Direction::between(5, 1).exit_offset(100.0), 100.0);
        assert_eq!(Direction::between(5, 5), Direction::Backward);
    }
}
