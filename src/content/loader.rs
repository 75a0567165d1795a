// SPDX-License-Identifier: MPL-2.0
//! Embedded content lookup.

use super::roster::InstructorsSection;
use crate::config::DEFAULT_LOCALE;
use crate::error::{ContentError, Result};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

/// Locales with an embedded content file, sorted.
#[must_use]
pub fn available_locales() -> Vec<LanguageIdentifier> {
    let mut locales: Vec<LanguageIdentifier> = ContentAsset::iter()
        .filter_map(|file| {
            file.strip_suffix(".toml")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
        })
        .collect();
    locales.sort_by_key(ToString::to_string);
    locales
}

/// Loads the instructors section for `locale`.
///
/// Only the language subtag is matched, so `en-GB` resolves to `en`. A locale
/// without content falls back to the default locale.
///
/// # Errors
///
/// Returns [`ContentError::Malformed`] if the file cannot be parsed and
/// [`ContentError::MissingLocale`] if even the default locale is missing.
pub fn load_section(locale: &LanguageIdentifier) -> Result<InstructorsSection> {
    let language = locale.language.as_str();
    if let Some(source) = read_file(language)? {
        let section = parse_section(language, &source)?;
        tracing::info!(locale = language, members = section.len(), "loaded instructor content");
        return Ok(section);
    }

    tracing::warn!(
        locale = language,
        fallback = DEFAULT_LOCALE,
        "no instructor content for locale, using fallback"
    );
    let source =
        read_file(DEFAULT_LOCALE)?.ok_or_else(|| ContentError::MissingLocale(language.to_string()))?;
    parse_section(DEFAULT_LOCALE, &source)
}

/// Parses one content file.
///
/// # Errors
///
/// Returns [`ContentError::Malformed`] with the parser message on failure.
pub fn parse_section(locale: &str, source: &str) -> Result<InstructorsSection> {
    toml::from_str(source).map_err(|err| {
        ContentError::Malformed {
            locale: locale.to_string(),
            message: err.to_string(),
        }
        .into()
    })
}

fn read_file(language: &str) -> Result<Option<String>> {
    let Some(file) = ContentAsset::get(&format!("{language}.toml")) else {
        return Ok(None);
    };
    let source = String::from_utf8(file.data.into_owned())
        .map_err(|_| ContentError::InvalidEncoding(language.to_string()))?;
    Ok(Some(source))
}
