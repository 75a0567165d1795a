// SPDX-License-Identifier: MPL-2.0
//! Presentation adapters for the instructor carousel.
//!
//! - [`console`] - Text renderer used by the headless CLI

pub mod console;

pub use console::ConsoleRenderer;
