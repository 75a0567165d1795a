// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization of the carousel chrome using the Fluent
//! localization system. It handles language detection, translation file
//! loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files, one per locale
//! - Runtime language switching
//! - Fallback to the default locale (`tr`) when nothing matches

pub mod fluent;

pub use fluent::I18n;
