// SPDX-License-Identifier: MPL-2.0
//! Renderer port definition.
//!
//! The navigator decides *what* moves; a [`TransitionRenderer`] decides how it
//! looks and how long it takes. Implementations own all timing and must report
//! back through [`CarouselController::animation_finished`] or
//! [`CarouselController::animation_cancelled`] exactly once per plan.
//!
//! [`CarouselController::animation_finished`]: crate::application::CarouselController::animation_finished
//! [`CarouselController::animation_cancelled`]: crate::application::CarouselController::animation_cancelled

use crate::application::navigator::SlotFrame;
use crate::domain::carousel::{Direction, TransitionPlan};

/// Presentation layer for the four carousel slots.
pub trait TransitionRenderer<T> {
    /// Starts animating `plan`. `frame` holds the slots as they stand before
    /// the step, including both pre-positioned buffers.
    fn animate(&mut self, plan: &TransitionPlan, frame: &SlotFrame<'_, T>);

    /// Resets the slots to their resting layout for `frame`.
    ///
    /// `entrance` is the direction the text block should enter from.
    fn settle(&mut self, frame: &SlotFrame<'_, T>, entrance: Direction);
}

/// What a [`RecordingRenderer`] observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// A plan started animating.
    Animate(TransitionPlan),
    /// The slots settled on the given main/side indices.
    Settle {
        current: usize,
        secondary: usize,
        entrance: Direction,
    },
}

/// Renderer that only records calls, for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in call order.
    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Plans that were animated, in order.
    pub fn animated_plans(&self) -> impl Iterator<Item = &TransitionPlan> {
        self.events.iter().filter_map(|event| match event {
            RenderEvent::Animate(plan) => Some(plan),
            RenderEvent::Settle { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> TransitionRenderer<T> for RecordingRenderer {
    fn animate(&mut self, plan: &TransitionPlan, _frame: &SlotFrame<'_, T>) {
        self.events.push(RenderEvent::Animate(*plan));
    }

    fn settle(&mut self, frame: &SlotFrame<'_, T>, entrance: Direction) {
        self.events.push(RenderEvent::Settle {
            current: frame.state.current(),
            secondary: frame.state.secondary(),
            entrance,
        });
    }
}
