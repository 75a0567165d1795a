// SPDX-License-Identifier: MPL-2.0
//! Pointer surface geometry.

/// Horizontal span of the interactive carousel surface, in the same
/// coordinate space as the pointer events fed to the navigator.
///
/// Only the horizontal axis decides a step, so the vertical extent is not
/// tracked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceBounds {
    x: f32,
    width: f32,
}

impl SurfaceBounds {
    /// Creates bounds from the left edge and width. A negative width is
    /// clamped to zero.
    #[must_use]
    pub fn new(x: f32, width: f32) -> Self {
        Self {
            x,
            width: width.max(0.0),
        }
    }

    /// Bounds anchored at the origin spanning `width`.
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        Self::new(0.0, width)
    }

    /// Horizontal midpoint, the split between backward and forward halves.
    #[must_use]
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}
