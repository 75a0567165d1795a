// SPDX-License-Identifier: MPL-2.0
//! Carousel navigation over an ordered item list.
//!
//! [`CarouselNavigator`] owns the item list, the settled [`CarouselState`] and
//! the transition lock. A click produces at most one [`TransitionPlan`]; the
//! state only moves once the renderer reports that plan as finished.

use crate::domain::carousel::{
    CarouselState, CursorSide, Direction, PlanId, SurfaceBounds, TransitionPlan,
};
use crate::domain::error::{IgnoreReason, TransitionError};

/// Result of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A transition was started; hand the plan to the renderer.
    Planned(TransitionPlan),
    /// The click was swallowed.
    Ignored(IgnoreReason),
}

impl Interaction {
    /// Returns the plan if a transition was started.
    #[must_use]
    pub fn plan(&self) -> Option<&TransitionPlan> {
        match self {
            Interaction::Planned(plan) => Some(plan),
            Interaction::Ignored(_) => None,
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Interaction::Ignored(_))
    }
}

/// The four slots of a frame, resolved to items.
#[derive(Debug, Clone, Copy)]
pub struct SlotFrame<'a, T> {
    /// Large focal slot.
    pub main: &'a T,
    /// Small side slot.
    pub side: &'a T,
    /// Off-screen item entering on a forward step.
    pub next_buffer: &'a T,
    /// Off-screen item entering on a backward step.
    pub prev_buffer: &'a T,
    /// Indices the slots were resolved from.
    pub state: CarouselState,
}

/// Read-only snapshot for the text column and counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselInfo {
    /// Index in the main slot, `None` for an inert reel.
    pub current_index: Option<usize>,
    /// Index in the side slot, `None` for an inert reel.
    pub secondary_index: Option<usize>,
    /// Number of items.
    pub total_count: usize,
    /// Whether a transition is in flight.
    pub is_animating: bool,
    /// Side the pointer last hovered.
    pub cursor_side: CursorSide,
    /// Direction of the last committed step; the text block enters from it.
    pub last_direction: Direction,
}

impl CarouselInfo {
    /// One-based position, zero-padded to two digits ("01").
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        self.current_index.map(|index| format!("{:02}", index + 1))
    }

    /// Item count, zero-padded to two digits ("08").
    #[must_use]
    pub fn total_label(&self) -> String {
        format!("{:02}", self.total_count)
    }

    /// Whether a click could currently start a transition.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.total_count >= 2 && !self.is_animating
    }
}

/// Navigator for a circular reel of items.
///
/// # Lifecycle
///
/// 1. [`CarouselNavigator::new`] settles on `current = 0`, `secondary = 1`.
/// 2. [`CarouselNavigator::on_interact`] freezes the direction from the pointer
///    position, locks the navigator and returns a plan.
/// 3. [`CarouselNavigator::complete_transition`] commits the plan and unlocks,
///    or [`CarouselNavigator::abort_transition`] unlocks without moving.
///
/// Clicks arriving between 2 and 3 are ignored, never queued.
#[derive(Debug, Clone)]
pub struct CarouselNavigator<T> {
    items: Vec<T>,
    state: Option<CarouselState>,
    in_flight: Option<TransitionPlan>,
    next_id: PlanId,
    cursor_side: CursorSide,
    last_direction: Direction,
}

impl<T> CarouselNavigator<T> {
    /// Creates a navigator over `items`.
    ///
    /// An empty list produces an inert navigator that renders nothing and
    /// ignores every interaction.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let state = CarouselState::initialize(items.len());
        if state.is_none() {
            tracing::debug!("carousel initialized without items, staying inert");
        }
        Self {
            items,
            state,
            in_flight: None,
            next_id: PlanId::new(1),
            cursor_side: CursorSide::default(),
            last_direction: Direction::default(),
        }
    }

    /// The item list, in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when built from an empty list.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.state.is_none()
    }

    /// Settled state. While animating this still holds the pre-transition indices.
    #[must_use]
    pub fn state(&self) -> Option<&CarouselState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Plan currently being animated, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<&TransitionPlan> {
        self.in_flight.as_ref()
    }

    #[must_use]
    pub fn cursor_side(&self) -> CursorSide {
        self.cursor_side
    }

    /// Item in the main slot.
    #[must_use]
    pub fn current_item(&self) -> Option<&T> {
        self.state.and_then(|state| self.items.get(state.current()))
    }

    /// Records which half of the surface the pointer hovers.
    ///
    /// Only the cursor glyph depends on this. An in-flight plan keeps the
    /// direction it was issued with even if the surface moves or resizes.
    pub fn track_pointer(&mut self, pointer_x: f32, bounds: SurfaceBounds) -> CursorSide {
        self.cursor_side = CursorSide::from_pointer(pointer_x, bounds);
        self.cursor_side
    }

    /// Handles a click or tap at `pointer_x` on `bounds`.
    pub fn on_interact(&mut self, pointer_x: f32, bounds: SurfaceBounds) -> Interaction {
        let Some(state) = self.state else {
            return Interaction::Ignored(IgnoreReason::Inert);
        };
        if !state.can_navigate() {
            return Interaction::Ignored(IgnoreReason::SingleItem);
        }
        if let Some(plan) = &self.in_flight {
            tracing::trace!(in_flight = %plan.id(), "click swallowed during transition");
            return Interaction::Ignored(IgnoreReason::Animating);
        }

        let direction = Direction::from_pointer(pointer_x, bounds);
        let plan = TransitionPlan::new(self.next_id, direction, &state);
        self.next_id = self.next_id.next();
        self.in_flight = Some(plan);

        tracing::debug!(
            plan = %plan.id(),
            ?direction,
            from = state.current(),
            to = plan.to().current,
            "carousel transition planned"
        );
        Interaction::Planned(plan)
    }

    /// Commits a finished plan and unlocks the navigator.
    ///
    /// The indices come from the plan stored when it was issued; `plan` only
    /// identifies it and must match that stored plan exactly.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotAnimating`] if nothing is in flight (the
    /// plan was already committed or aborted), or
    /// [`TransitionError::PlanMismatch`] if a different plan is in flight.
    /// State is left untouched in both cases.
    pub fn complete_transition(
        &mut self,
        plan: &TransitionPlan,
    ) -> Result<CarouselState, TransitionError> {
        let Some(in_flight) = self.in_flight else {
            tracing::warn!(plan = %plan.id(), "ignoring completion of stale plan");
            return Err(TransitionError::NotAnimating {
                received: plan.id(),
            });
        };
        if in_flight != *plan {
            tracing::warn!(
                plan = %plan.id(),
                expected = %in_flight.id(),
                "ignoring completion of mismatched plan"
            );
            return Err(TransitionError::PlanMismatch {
                expected: in_flight.id(),
                received: plan.id(),
            });
        }

        // A plan is only ever issued while a state exists.
        let Some(state) = self.state.as_mut() else {
            return Err(TransitionError::NotAnimating {
                received: plan.id(),
            });
        };
        self.in_flight = None;
        self.last_direction = in_flight.direction();
        state.commit(in_flight.to());

        tracing::debug!(
            plan = %in_flight.id(),
            current = state.current(),
            secondary = state.secondary(),
            "carousel transition committed"
        );
        Ok(*state)
    }

    /// Releases the transition lock without moving.
    ///
    /// Returns true if a transition was actually in flight.
    pub fn abort_transition(&mut self) -> bool {
        match self.in_flight.take() {
            Some(plan) => {
                tracing::debug!(plan = %plan.id(), "carousel transition aborted");
                true
            }
            None => false,
        }
    }

    /// Items for the four slots of the settled state.
    #[must_use]
    pub fn frame(&self) -> Option<SlotFrame<'_, T>> {
        let state = self.state?;
        Some(SlotFrame {
            main: self.items.get(state.current())?,
            side: self.items.get(state.secondary())?,
            next_buffer: self.items.get(state.next_buffer())?,
            prev_buffer: self.items.get(state.prev_buffer())?,
            state,
        })
    }

    /// Snapshot for the text column.
    #[must_use]
    pub fn info(&self) -> CarouselInfo {
        CarouselInfo {
            current_index: self.state.map(|state| state.current()),
            secondary_index: self.state.map(|state| state.secondary()),
            total_count: self.items.len(),
            is_animating: self.is_animating(),
            cursor_side: self.cursor_side,
            last_direction: self.last_direction,
        }
    }
}

impl<T> Default for CarouselNavigator<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
