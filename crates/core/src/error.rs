//! Error types shared by all arsizer crates.

use thiserror::Error;

/// Result type alias using the crate [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by sizing, packing and catalog operations.
///
/// Degenerate polygons and "no viable configuration" outcomes are not errors:
/// the former yields a zero area, the latter an empty recommendation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Sizing inputs are outside their valid ranges.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Footprint item size or spacing is not a positive finite number.
    #[error("invalid footprint: {0}")]
    InvalidFootprint(String),

    /// A catalog entry was rejected.
    #[error("invalid catalog entry '{model}': {reason}")]
    InvalidCatalogEntry {
        /// Model name of the offending entry.
        model: String,
        /// Why the entry was rejected.
        reason: String,
    },

    /// A catalog or configuration document could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),

    /// A catalog or configuration file could not be read.
    #[error("io error: {0}")]
    IoError(String),
}

impl Error {
    /// Creates an invalid input error.
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput(details.into())
    }

    /// Creates an invalid catalog entry error.
    pub fn invalid_entry(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCatalogEntry {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors the caller should answer by re-prompting the user.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_input("roof area must be positive");
        assert_eq!(err.to_string(), "invalid input: roof area must be positive");
        assert!(err.is_invalid_input());

        let err = Error::invalid_entry("SPR-X", "unit area must be positive");
        assert!(err.to_string().contains("SPR-X"));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let err: Error = io.into();
        assert!(matches!(err, Error::IoError(ref msg) if msg.contains("missing.toml")));
    }
}
