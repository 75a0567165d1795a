// SPDX-License-Identifier: MPL-2.0
//! Transition timing value object.

use std::time::Duration;

/// Transition duration bounds in milliseconds.
pub mod duration_bounds {
    /// Shortest accepted transition.
    pub const MIN_MS: u32 = 100;
    /// Longest accepted transition.
    pub const MAX_MS: u32 = 5_000;
    /// Default transition, the length of the longest slot tween.
    pub const DEFAULT_MS: u32 = 700;
}

/// How long a renderer takes to play one carousel step, clamped to
/// 100 ms–5 s.
///
/// The navigator never reads this; it only paces renderers that need a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionDuration(u32);

impl TransitionDuration {
    /// Creates a duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(duration_bounds::MIN_MS, duration_bounds::MAX_MS))
    }

    /// Raw milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_MS)
    }
}
