// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core carousel logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`carousel`]: Index state and transition plans ([`CarouselState`](carousel::CarouselState),
//!   [`TransitionPlan`](carousel::TransitionPlan), [`Direction`](carousel::Direction))
//! - [`error`]: Domain error types ([`TransitionError`](error::TransitionError))

pub mod carousel;
pub mod error;
