// SPDX-License-Identifier: MPL-2.0
use crate::application::port::StoreError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Store(StoreError),
    /// The notification API was used outside of a provider scope.
    ///
    /// This is a wiring defect, not a runtime condition: callers propagate it
    /// instead of swallowing it.
    ContextMissing,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Store(e) => write!(f, "Store Error: {}", e),
            Error::ContextMissing => write!(
                f,
                "notification API used outside of a notification provider scope"
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::Store(err)
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
    fn store_error_converts_into_store_variant() {
        let err: Error = StoreError::Network("connection reset".into()).into();
        assert!(matches!(err, Error::Store(StoreError::Network(_))));
        assert!(format!("{}", err).contains("connection reset"));
    }

    #[test]
    fn context_missing_mentions_provider() {
        let message = Error::ContextMissing.to_string();
        assert!(message.contains("provider scope"));
    }
}
