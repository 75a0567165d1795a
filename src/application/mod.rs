// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`navigator`]: Carousel navigation over an item list (`CarouselNavigator`)
//! - [`controller`]: Wiring between a navigator and a renderer
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation adapters implement application layer ports
//!
//! # Example
//!
//! ```
//! use timeright_reel::application::{CarouselController, RecordingRenderer};
//! use timeright_reel::domain::carousel::SurfaceBounds;
//!
//! let bounds = SurfaceBounds::from_width(1000.0);
//! let mut controller = CarouselController::new(vec!["a", "b", "c"], RecordingRenderer::new());
//!
//! let plan = *controller.click(750.0, bounds).plan().expect("forward step");
//! let settled = controller.animation_finished(&plan).expect("commit");
//! assert_eq!(settled.current(), 1);
//! ```

pub mod controller;
pub mod navigator;
pub mod port;

// Re-export main types
pub use controller::CarouselController;
pub use navigator::{CarouselInfo, CarouselNavigator, Interaction, SlotFrame};
pub use port::{RecordingRenderer, RenderEvent, TransitionRenderer};
