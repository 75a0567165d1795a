// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale**: Default and supported content locales
//! - **Content**: Image CDN location
//! - **Carousel**: Transition pacing for clock-driven renderers

use crate::domain::carousel::timing::duration_bounds;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale served when nothing else matches.
pub const DEFAULT_LOCALE: &str = "tr";

/// Locales with embedded content and translations.
pub const SUPPORTED_LOCALES: [&str; 2] = ["tr", "en"];

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Base URL of the image CDN.
pub const DEFAULT_CDN_BASE_URL: &str = "https://cdn.timerightproduction.org";

/// Path prefix of instructor portraits on the CDN.
pub const INSTRUCTOR_IMAGE_PATH: &str = "images/instructor";

/// Local image shown when an instructor has no portrait.
pub const PLACEHOLDER_INSTRUCTOR_IMAGE: &str = "/placeholder-instructor.webp";

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default transition duration in milliseconds.
pub const DEFAULT_TRANSITION_MS: u32 = duration_bounds::DEFAULT_MS;

/// Minimum transition duration in milliseconds.
pub const MIN_TRANSITION_MS: u32 = duration_bounds::MIN_MS;

/// Maximum transition duration in milliseconds.
pub const MAX_TRANSITION_MS: u32 = duration_bounds::MAX_MS;

/// Default width of the pointer surface used by the headless CLI.
pub const DEFAULT_SURFACE_WIDTH: f32 = 1440.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TRANSITION_MS > 0);
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_supported() {
        assert!(SUPPORTED_LOCALES.contains(&DEFAULT_LOCALE));
    }

    #[test]
    fn transition_defaults_are_valid() {
        assert_eq!(DEFAULT_TRANSITION_MS, 700);
        assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
        assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    }

    #[test]
    fn cdn_base_has_no_trailing_slash() {
        assert!(!DEFAULT_CDN_BASE_URL.ends_with('/'));
        assert!(!INSTRUCTOR_IMAGE_PATH.starts_with('/'));
    }
}
