// SPDX-License-Identifier: MPL-2.0
//! Carousel transition outcomes.

use crate::domain::carousel::PlanId;
use std::fmt;

/// Why an interaction produced no transition.
///
/// This is not a failure: a swallowed click simply does nothing on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The reel has no items at all.
    Inert,
    /// Only one item, so there is nothing to step to.
    SingleItem,
    /// Another transition is still in flight.
    Animating,
}

impl IgnoreReason {
    /// Returns the i18n message key for this reason.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            IgnoreReason::Inert => "carousel-ignored-inert",
            IgnoreReason::SingleItem => "carousel-ignored-single",
            IgnoreReason::Animating => "carousel-ignored-animating",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::Inert => write!(f, "carousel has no items"),
            IgnoreReason::SingleItem => write!(f, "carousel has a single item"),
            IgnoreReason::Animating => write!(f, "a transition is already in flight"),
        }
    }
}

/// A completion callback that the navigator refused to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// No transition is in flight; the plan was already committed or aborted.
    NotAnimating {
        /// Plan that was presented.
        received: PlanId,
    },
    /// A different plan is in flight.
    PlanMismatch {
        /// Plan the navigator is waiting for.
        expected: PlanId,
        /// Plan that was presented.
        received: PlanId,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::NotAnimating { received } => {
                write!(f, "stale plan {received}: no transition in flight")
            }
            TransitionError::PlanMismatch { expected, received } => {
                write!(f, "stale plan {received}: waiting for {expected}")
            }
        }
    }
}

impl std::error::Error for TransitionError {}
