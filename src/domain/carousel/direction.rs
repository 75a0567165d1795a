// SPDX-License-Identifier: MPL-2.0
//! Transition direction and cursor side.

use super::geometry::SurfaceBounds;

/// Direction of a carousel step.
///
/// `Forward` promotes the side item into the main slot, `Backward` brings the
/// item preceding the main one back into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Right half of the surface was hit.
    #[default]
    Forward,
    /// Left half of the surface was hit.
    Backward,
}

impl Direction {
    /// Resolves the direction for a pointer position on the given surface.
    ///
    /// Positions strictly left of the horizontal midpoint go backward; the
    /// midpoint itself and everything right of it go forward. A non-finite
    /// coordinate never compares below the midpoint and so resolves forward.
    #[must_use]
    pub fn from_pointer(pointer_x: f32, bounds: SurfaceBounds) -> Self {
        if pointer_x < bounds.mid_x() {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// Half of the surface the pointer currently hovers.
///
/// Drives the arrow glyph of the custom cursor, which points right over the
/// right half and is flipped over the left half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorSide {
    /// Left half, arrow flipped.
    Left,
    /// Right half.
    #[default]
    Right,
}

impl CursorSide {
    /// Resolves the hovered side, using the same tie-break as [`Direction::from_pointer`].
    #[must_use]
    pub fn from_pointer(pointer_x: f32, bounds: SurfaceBounds) -> Self {
        Direction::from_pointer(pointer_x, bounds).into()
    }

    /// Returns the i18n key of the cursor hint for this side.
    #[must_use]
    pub fn hint_i18n_key(self) -> &'static str {
        match self {
            Self::Left => "carousel-hint-previous",
            Self::Right => "carousel-hint-next",
        }
    }
}

impl From<Direction> for CursorSide {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::Right,
            Direction::Backward => Self::Left,
        }
    }
}
