// SPDX-License-Identifier: MPL-2.0
//! `timeright_reel` drives the instructor carousel of the Time Right
//! Production site.
//!
//! The core is a small index state machine: two visible slots, two
//! pre-positioned buffers and a one-transition-at-a-time lock. Around it sit
//! the localized instructor content, Fluent translations for the carousel
//! chrome, user preferences, and a text renderer for headless use.

#![doc(html_root_url = "https://docs.rs/timeright_reel/0.1.0")]

pub mod application;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
