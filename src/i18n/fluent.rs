// SPDX-License-Identifier: MPL-2.0
use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(%locale, errors = errors.len(), "translation file has syntax errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%locale, errors = errors.len(), "duplicate translation keys");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale = DEFAULT_LOCALE
            .parse::<LanguageIdentifier>()
            .unwrap_or_default();
        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(default_locale);
        tracing::debug!(locale = %current_locale, "i18n initialized");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Switches language. Returns false if no bundle exists for `locale`.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI args, 2. config file, 3. OS locale
    [cli_lang.as_deref(), config_lang, os_locale.as_deref()]
        .into_iter()
        .flatten()
        .find_map(|tag| match_available(tag, available))
}

/// Exact match first, then a match on the language subtag alone ("tr-TR" → "tr").
fn match_available(tag: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let requested = tag.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&requested) {
        return Some(requested);
    }
    available
        .iter()
        .find(|candidate| candidate.language == requested.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::carousel::CursorSide;
    use crate::domain::error::IgnoreReason;
    use crate::error::ContentError;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en".parse().unwrap(), "tr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let lang = resolve_locale(Some("en".to_string()), Some("tr"), None, &available());
        assert_eq!(lang, Some("en".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let lang = resolve_locale(None, Some("en"), Some("tr-TR".to_string()), &available());
        assert_eq!(lang, Some("en".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_os_region_matches_language() {
        let lang = resolve_locale(None, None, Some("tr-TR".to_string()), &available());
        assert_eq!(lang, Some("tr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_skips_unsupported() {
        let lang = resolve_locale(Some("de".to_string()), None, Some("en-US".to_string()), &available());
        assert_eq!(lang, Some("en".parse().unwrap()));
        assert_eq!(resolve_locale(Some("fr".to_string()), None, None, &available()), None);
    }

    #[test]
    fn translations_exist_for_both_locales() {
        let mut i18n = I18n::new(Some("en".to_string()), &Config::default());
        assert_eq!(i18n.available_locales(), available().as_slice());
        assert_eq!(i18n.tr("carousel-section-label"), "Instructors");

        assert!(i18n.set_locale("tr".parse().unwrap()));
        assert_eq!(i18n.tr("carousel-section-label"), "Eğitmenler");
    }

    #[test]
    fn unknown_locale_is_not_selected() {
        let mut i18n = I18n::new(Some("en".to_string()), &Config::default());
        assert!(!i18n.set_locale("fr".parse().unwrap()));
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn every_code_key_is_translated() {
        let keys = [
            CursorSide::Left.hint_i18n_key(),
            CursorSide::Right.hint_i18n_key(),
            IgnoreReason::Inert.i18n_key(),
            IgnoreReason::SingleItem.i18n_key(),
            IgnoreReason::Animating.i18n_key(),
            ContentError::MissingLocale(String::new()).i18n_key(),
            ContentError::InvalidEncoding(String::new()).i18n_key(),
            crate::error::Error::Io(String::new()).i18n_key(),
            "notification-config-load-error",
            "carousel-empty",
        ];
        for locale in ["en", "tr"] {
            let i18n = I18n::new(Some(locale.to_string()), &Config::default());
            for key in keys {
                assert!(!i18n.tr(key).starts_with("MISSING"), "{locale}: {key}");
            }
        }
    }

    #[test]
    fn counter_formats_arguments() {
        let i18n = I18n::new(Some("en".to_string()), &Config::default());
        let text = i18n.tr_with_args(
            "carousel-counter",
            &[("current", "03".into()), ("total", "08".into())],
        );
        assert_eq!(text, "03 / 08");
    }
}
