// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that presentation adapters implement.
//! These traits use only domain and application types, so the navigator stays
//! independent of any UI toolkit or animation library.
//!
//! # Available Ports
//!
//! - [`renderer`]: Four-slot transition rendering
//!
//! # Example
//!
//! ```ignore
//! use timeright_reel::application::port::TransitionRenderer;
//!
//! struct CanvasRenderer { /* ... */ }
//! impl<T> TransitionRenderer<T> for CanvasRenderer { /* ... */ }
//! ```

pub mod renderer;

// Re-export main types for convenience
pub use renderer::{RecordingRenderer, RenderEvent, TransitionRenderer};
