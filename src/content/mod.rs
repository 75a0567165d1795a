// SPDX-License-Identifier: MPL-2.0
//! Localized instructor content.
//!
//! Each supported locale ships one embedded TOML file describing the
//! instructors section. The navigator never validates content; this module is
//! the only place that parses it.
//!
//! - [`roster`]: Instructor records and the section they belong to
//! - [`loader`]: Embedded file lookup with default-locale fallback
//! - [`image_url`]: Portrait URLs on the image CDN

pub mod image_url;
pub mod loader;
pub mod roster;

pub use image_url::instructor_image_url;
pub use loader::{available_locales, load_section, parse_section};
pub use roster::{Instructor, InstructorsSection};
