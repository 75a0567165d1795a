// SPDX-License-Identifier: MPL-2.0
//! Settled carousel indices.
//!
//! [`CarouselState`] holds the four "hot" indices of the reel: the main slot,
//! the side slot and the two off-screen buffers. Planning a step is a pure
//! function of the state; only [`CarouselState::commit`] mutates it, and it
//! always recomputes both buffers from the newly settled pair.

use super::direction::Direction;
use super::plan::SlotPair;

/// Index state over a fixed circular list of `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselState {
    len: usize,
    current: usize,
    secondary: usize,
    next_buffer: usize,
    prev_buffer: usize,
}

impl CarouselState {
    /// Creates the initial state for a list of `len` items.
    ///
    /// Returns `None` for an empty list; callers treat that as an inert reel.
    /// With a single item the side slot aliases the main one.
    #[must_use]
    pub fn initialize(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self::settled(len, 0, 1 % len))
    }

    fn settled(len: usize, current: usize, secondary: usize) -> Self {
        Self {
            len,
            current,
            secondary,
            next_buffer: (secondary + 1) % len,
            prev_buffer: (current + len - 1) % len,
        }
    }

    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; an empty list never produces a state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index shown in the main slot.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Index shown in the side slot.
    #[must_use]
    pub fn secondary(&self) -> usize {
        self.secondary
    }

    /// Index pre-positioned for a forward step.
    #[must_use]
    pub fn next_buffer(&self) -> usize {
        self.next_buffer
    }

    /// Index pre-positioned for a backward step.
    #[must_use]
    pub fn prev_buffer(&self) -> usize {
        self.prev_buffer
    }

    /// The settled main/side pair.
    #[must_use]
    pub fn pair(&self) -> SlotPair {
        SlotPair {
            current: self.current,
            secondary: self.secondary,
        }
    }

    /// Whether a step can happen at all (at least two items).
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.len >= 2
    }

    /// Pair after a forward step: the side item takes the main slot and the
    /// next buffer slides into the side slot.
    #[must_use]
    pub fn plan_forward(&self) -> SlotPair {
        SlotPair {
            current: self.secondary,
            secondary: self.next_buffer,
        }
    }

    /// Pair after a backward step: the previous buffer takes the main slot and
    /// the old main item shrinks into the side slot.
    #[must_use]
    pub fn plan_backward(&self) -> SlotPair {
        SlotPair {
            current: self.prev_buffer,
            secondary: self.current,
        }
    }

    /// Pair after a step in `direction`.
    #[must_use]
    pub fn plan(&self, direction: Direction) -> SlotPair {
        match direction {
            Direction::Forward => self.plan_forward(),
            Direction::Backward => self.plan_backward(),
        }
    }

    /// Settles on `target` and recomputes both buffers.
    ///
    /// Indices are reduced modulo the list length.
    pub fn commit(&mut self, target: SlotPair) {
        *self = Self::settled(self.len, target.current % self.len, target.secondary % self.len);
    }

    /// Returns true if the side slot shows the item right after the main one.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.len < 2 || self.secondary == (self.current + 1) % self.len
    }
}
