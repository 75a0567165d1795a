// SPDX-License-Identifier: MPL-2.0
//! Navigator/renderer wiring.
//!
//! [`CarouselController`] forwards pointer events to a [`CarouselNavigator`]
//! and keeps the renderer in step with it: every issued plan is animated,
//! every commit or abort is followed by a settle.

use crate::application::navigator::{CarouselInfo, CarouselNavigator, Interaction};
use crate::application::port::TransitionRenderer;
use crate::domain::carousel::{CarouselState, CursorSide, SurfaceBounds, TransitionPlan};
use crate::domain::error::TransitionError;

/// Drives a renderer from carousel interactions.
#[derive(Debug)]
pub struct CarouselController<T, R> {
    navigator: CarouselNavigator<T>,
    renderer: R,
}

impl<T, R> CarouselController<T, R>
where
    R: TransitionRenderer<T>,
{
    /// Builds the navigator and settles the renderer on the initial frame.
    pub fn new(items: Vec<T>, renderer: R) -> Self {
        let mut controller = Self {
            navigator: CarouselNavigator::new(items),
            renderer,
        };
        controller.settle();
        controller
    }

    #[must_use]
    pub fn navigator(&self) -> &CarouselNavigator<T> {
        &self.navigator
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn info(&self) -> CarouselInfo {
        self.navigator.info()
    }

    /// Pointer moved over the surface.
    pub fn hover(&mut self, pointer_x: f32, bounds: SurfaceBounds) -> CursorSide {
        self.navigator.track_pointer(pointer_x, bounds)
    }

    /// Pointer clicked the surface. A planned step is handed to the renderer
    /// before returning.
    pub fn click(&mut self, pointer_x: f32, bounds: SurfaceBounds) -> Interaction {
        let interaction = self.navigator.on_interact(pointer_x, bounds);
        if let Interaction::Planned(plan) = &interaction {
            if let Some(frame) = self.navigator.frame() {
                self.renderer.animate(plan, &frame);
            }
        }
        interaction
    }

    /// Renderer finished animating `plan`.
    ///
    /// # Errors
    ///
    /// Propagates [`TransitionError`] for stale or mismatched plans; the
    /// renderer is not settled again in that case.
    pub fn animation_finished(
        &mut self,
        plan: &TransitionPlan,
    ) -> Result<CarouselState, TransitionError> {
        let state = self.navigator.complete_transition(plan)?;
        self.settle();
        Ok(state)
    }

    /// Renderer was interrupted. Returns true if a transition was in flight.
    pub fn animation_cancelled(&mut self) -> bool {
        let aborted = self.navigator.abort_transition();
        if aborted {
            self.settle();
        }
        aborted
    }

    /// Consumes the controller, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn settle(&mut self) {
        let entrance = self.navigator.info().last_direction;
        if let Some(frame) = self.navigator.frame() {
            self.renderer.settle(&frame, entrance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{RecordingRenderer, RenderEvent};
    use crate::domain::carousel::Direction;

    fn bounds() -> SurfaceBounds {
        SurfaceBounds::from_width(400.0)
    }

    #[test]
    fn new_controller_settles_initial_frame() {
        let controller = CarouselController::new(vec![1, 2, 3], RecordingRenderer::new());
        assert_eq!(
            controller.renderer().events(),
            &[RenderEvent::Settle {
                current: 0,
                secondary: 1,
                entrance: Direction::Forward
            }]
        );
    }

    #[test]
    fn inert_controller_never_renders() {
        let mut controller: CarouselController<u8, _> =
            CarouselController::new(Vec::new(), RecordingRenderer::new());
        assert!(controller.click(300.0, bounds()).is_ignored());
        assert!(!controller.animation_cancelled());
        assert!(controller.renderer().events().is_empty());
    }

    #[test]
    fn click_animates_then_finish_settles() {
        let mut controller = CarouselController::new(vec!['a', 'b', 'c'], RecordingRenderer::new());
        controller.renderer_mut().clear();

        let plan = *controller.click(100.0, bounds()).plan().expect("plan");
        assert_eq!(controller.renderer().events(), &[RenderEvent::Animate(plan)]);

        let state = controller.animation_finished(&plan).expect("commit");
        assert_eq!(state.current(), 2);
        assert_eq!(
            controller.renderer().events().last(),
            Some(&RenderEvent::Settle {
                current: 2,
                secondary: 0,
                entrance: Direction::Backward
            })
        );
    }

    #[test]
    fn swallowed_clicks_do_not_reach_renderer() {
        let mut controller = CarouselController::new(vec!['a', 'b', 'c'], RecordingRenderer::new());
        let plan = *controller.click(300.0, bounds()).plan().expect("plan");
        for _ in 0..5 {
            assert!(controller.click(10.0, bounds()).is_ignored());
        }
        assert_eq!(controller.renderer().animated_plans().count(), 1);
        controller.animation_finished(&plan).expect("commit");
    }

    #[test]
    fn stale_finish_does_not_settle_twice() {
        let mut controller = CarouselController::new(vec!['a', 'b'], RecordingRenderer::new());
        let plan = *controller.click(300.0, bounds()).plan().expect("plan");
        controller.animation_finished(&plan).expect("commit");
        let events = controller.renderer().events().len();

        assert!(controller.animation_finished(&plan).is_err());
        assert_eq!(controller.renderer().events().len(), events);
    }

    #[test]
    fn hover_tracks_cursor_without_rendering() {
        let mut controller = CarouselController::new(vec!['a', 'b', 'c'], RecordingRenderer::new());
        let events = controller.renderer().events().len();

        assert_eq!(controller.hover(50.0, bounds()), CursorSide::Left);
        assert_eq!(controller.info().cursor_side, CursorSide::Left);
        assert_eq!(controller.hover(200.0, bounds()), CursorSide::Right);
        assert_eq!(controller.info().cursor_side, CursorSide::Right);

        assert_eq!(controller.renderer().events().len(), events);
        assert!(!controller.info().is_animating);
    }

    #[test]
    fn cancel_settles_on_previous_frame() {
        let mut controller = CarouselController::new(vec!['a', 'b', 'c'], RecordingRenderer::new());
        assert!(!controller.click(300.0, bounds()).is_ignored());
        assert!(controller.animation_cancelled());
        assert_eq!(
            controller.renderer().events().last(),
            Some(&RenderEvent::Settle {
                current: 0,
                secondary: 1,
                entrance: Direction::Forward
            })
        );
        assert!(!controller.info().is_animating);
    }
}
