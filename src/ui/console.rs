// SPDX-License-Identifier: MPL-2.0
//! Text renderer.
//!
//! Prints one card per settled frame and one line per started transition.
//! Output goes to any [`Write`] sink so tests can capture it.

use crate::application::navigator::SlotFrame;
use crate::application::port::TransitionRenderer;
use crate::content::Instructor;
use crate::domain::carousel::{Direction, TransitionPlan};
use crate::i18n::I18n;
use std::io::Write;

/// Renders carousel frames as localized text.
pub struct ConsoleRenderer<W> {
    out: W,
    i18n: I18n,
    cdn_base: String,
    total: usize,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, i18n: I18n, cdn_base: impl Into<String>, total: usize) -> Self {
        Self {
            out,
            i18n,
            cdn_base: cdn_base.into(),
            total,
        }
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Writes a free-form line through the renderer's sink.
    pub fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::warn!(%err, "failed to write carousel output");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn direction_label(&self, direction: Direction) -> String {
        match direction {
            Direction::Forward => self.i18n.tr("cli-direction-forward"),
            Direction::Backward => self.i18n.tr("cli-direction-backward"),
        }
    }
}

impl<W: Write> TransitionRenderer<Instructor> for ConsoleRenderer<W> {
    fn animate(&mut self, plan: &TransitionPlan, frame: &SlotFrame<'_, Instructor>) {
        let incoming = match plan.direction() {
            Direction::Forward => frame.next_buffer,
            Direction::Backward => frame.prev_buffer,
        };
        tracing::debug!(plan = %plan.id(), incoming = %incoming.name, "animating slots");

        let text = self.i18n.tr_with_args(
            "cli-transition",
            &[
                ("direction", self.direction_label(plan.direction()).into()),
                ("from", frame.main.name.as_str().into()),
                ("to", incoming_main(plan, frame).name.as_str().into()),
            ],
        );
        self.line(&text);
    }

    fn settle(&mut self, frame: &SlotFrame<'_, Instructor>, _entrance: Direction) {
        let counter = self.i18n.tr_with_args(
            "carousel-counter",
            &[
                ("current", format!("{:02}", frame.state.current() + 1).into()),
                ("total", format!("{:02}", self.total).into()),
            ],
        );
        let main = frame.main;
        let url = main.image_url(&self.cdn_base);
        let mut card = format!("[{counter}] {} | {}\n    {url}", main.name, main.title);
        if main.has_bio() {
            card.push_str("\n    ");
            card.push_str(main.bio.trim());
        }
        self.line(&card);
    }
}

/// Item that lands in the main slot once `plan` completes.
fn incoming_main<'a>(plan: &TransitionPlan, frame: &SlotFrame<'a, Instructor>) -> &'a Instructor {
    match plan.direction() {
        Direction::Forward => frame.side,
        Direction::Backward => frame.prev_buffer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CarouselController;
    use crate::config::Config;
    use crate::domain::carousel::SurfaceBounds;

    fn instructor(name: &str) -> Instructor {
        Instructor {
            name: name.to_string(),
            title: "Actor".to_string(),
            bio: String::new(),
            image: format!("{}.webp", name.to_lowercase()),
        }
    }

    fn output(renderer: ConsoleRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).expect("utf8 output")
    }

    #[test]
    fn settle_prints_counter_and_portrait_url() {
        let i18n = I18n::new(Some("en".to_string()), &Config::default());
        let renderer = ConsoleRenderer::new(Vec::new(), i18n, "https://cdn.example.org", 3);
        let controller = CarouselController::new(
            vec![instructor("Ada"), instructor("Bo"), instructor("Cy")],
            renderer,
        );

        let text = output(controller.into_renderer());
        assert!(text.contains("[01 / 03] Ada | Actor"));
        assert!(text.contains("https://cdn.example.org/images/instructor/ada.webp"));
    }

    #[test]
    fn animate_names_outgoing_and_incoming() {
        let i18n = I18n::new(Some("en".to_string()), &Config::default());
        let renderer = ConsoleRenderer::new(Vec::new(), i18n, "https://cdn.example.org", 3);
        let mut controller = CarouselController::new(
            vec![instructor("Ada"), instructor("Bo"), instructor("Cy")],
            renderer,
        );
        let bounds = SurfaceBounds::from_width(100.0);
        let plan = *controller.click(10.0, bounds).plan().expect("plan");
        controller.animation_finished(&plan).expect("commit");

        let text = output(controller.into_renderer());
        assert!(text.contains("Moving backward: Ada → Cy"));
        assert!(text.contains("[03 / 03] Cy | Actor"));
    }
}
