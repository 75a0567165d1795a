// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(ContentError),
}

impl Error {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Content(e) => e.i18n_key(),
        }
    }
}

/// Problems with the localized instructor content.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// No content file is embedded for the requested locale
    MissingLocale(String),

    /// The content file is not valid UTF-8
    InvalidEncoding(String),

    /// The content file could not be parsed
    Malformed { locale: String, message: String },
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::MissingLocale(_) => "error-content-missing-locale",
            ContentError::InvalidEncoding(_) => "error-content-encoding",
            ContentError::Malformed { .. } => "error-content-malformed",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MissingLocale(locale) => {
                write!(f, "No content for locale: {}", locale)
            }
            ContentError::InvalidEncoding(locale) => {
                write!(f, "Content for locale {} is not valid UTF-8", locale)
            }
            ContentError::Malformed { locale, message } => {
                write!(f, "Malformed content for locale {}: {}", locale, message)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn content_error_wraps_into_error() {
        let err: Error = ContentError::MissingLocale("de".to_string()).into();
        assert_eq!(format!("{}", err), "Content Error: No content for locale: de");
    }

    #[test]
    fn content_error_i18n_keys() {
        assert_eq!(
            ContentError::MissingLocale("de".into()).i18n_key(),
            "error-content-missing-locale"
        );
        assert_eq!(
            ContentError::Malformed {
                locale: "en".into(),
                message: "x".into()
            }
            .i18n_key(),
            "error-content-malformed"
        );
    }

    #[test]
    fn error_i18n_key_delegates_to_content() {
        let err: Error = ContentError::InvalidEncoding("tr".into()).into();
        assert_eq!(err.i18n_key(), "error-content-encoding");
        assert_eq!(Error::Io("x".into()).i18n_key(), "error-io");
    }

    #[test]
    fn toml_error_maps_to_config() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
