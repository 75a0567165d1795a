// SPDX-License-Identifier: MPL-2.0
//! Transition plans handed from the navigator to the renderer.

use super::direction::Direction;
use super::state::CarouselState;
use std::fmt;

/// Main/side index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotPair {
    /// Index in the main slot.
    pub current: usize,
    /// Index in the side slot.
    pub secondary: usize,
}

/// Identifier of an issued plan, unique per navigator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanId(u64);

impl PlanId {
    /// Wraps a raw sequence number.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw sequence number.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// The identifier following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One carousel step: where every slot stands now and where it ends up.
///
/// The buffers are the indices pre-positioned off-screen when the plan was
/// issued. A plan never recomputes them; fresh buffers only exist after the
/// navigator commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionPlan {
    id: PlanId,
    direction: Direction,
    from: SlotPair,
    to: SlotPair,
    next_buffer: usize,
    prev_buffer: usize,
}

impl TransitionPlan {
    /// Plans a step in `direction` from the settled `state`.
    #[must_use]
    pub fn new(id: PlanId, direction: Direction, state: &CarouselState) -> Self {
        Self {
            id,
            direction,
            from: state.pair(),
            to: state.plan(direction),
            next_buffer: state.next_buffer(),
            prev_buffer: state.prev_buffer(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlanId {
        self.id
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Pair on screen when the plan was issued.
    #[must_use]
    pub fn from(&self) -> SlotPair {
        self.from
    }

    /// Pair committed once the transition finishes.
    #[must_use]
    pub fn to(&self) -> SlotPair {
        self.to
    }

    #[must_use]
    pub fn next_buffer(&self) -> usize {
        self.next_buffer
    }

    #[must_use]
    pub fn prev_buffer(&self) -> usize {
        self.prev_buffer
    }

    /// Buffer that animates into view during this step.
    #[must_use]
    pub fn incoming(&self) -> usize {
        match self.direction {
            Direction::Forward => self.next_buffer,
            Direction::Backward => self.prev_buffer,
        }
    }

    /// Visible item that leaves the screen during this step.
    #[must_use]
    pub fn outgoing(&self) -> usize {
        match self.direction {
            Direction::Forward => self.from.current,
            Direction::Backward => self.from.secondary,
        }
    }
}
