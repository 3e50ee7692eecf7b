// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures while reading `settings.toml`.
///
/// They never stop the application: the caller falls back to defaults and
/// surfaces [`Error::i18n_key`] to the user.
#[derive(Debug, Clone)]
pub enum Error {
    /// The file exists but could not be read.
    Io(String),
    /// The file was read but is not a valid configuration.
    Config(String),
}

impl Error {
    /// Returns the i18n message key describing this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-config-read-error",
            Error::Config(_) => "notification-config-load-error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

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
    fn from_toml_error_produces_config_variant() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("a = = 1");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn each_variant_has_its_own_message_key() {
        assert_eq!(
            Error::Io(String::new()).i18n_key(),
            "notification-config-read-error"
        );
        assert_eq!(
            Error::Config(String::new()).i18n_key(),
            "notification-config-load-error"
        );
    }
}
