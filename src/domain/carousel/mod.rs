// SPDX-License-Identifier: MPL-2.0
//! Carousel domain types.
//!
//! Index arithmetic, transition plans and pointer geometry for the instructor
//! reel. Nothing here knows about items, rendering or timing sources; the
//! application layer pairs these values with the actual instructor list.

pub mod direction;
pub mod geometry;
pub mod plan;
pub mod state;
pub mod timing;

// Re-export commonly used types
pub use direction::{CursorSide, Direction};
pub use geometry::SurfaceBounds;
pub use plan::{PlanId, SlotPair, TransitionPlan};
pub use state::CarouselState;
pub use timing::TransitionDuration;
