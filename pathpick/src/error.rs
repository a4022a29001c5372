//! Error types for the pathpick library.
//!
//! Only malformed input is a caller-visible failure of the pick operation.
//! Filesystem and process failures met while probing candidates are absorbed
//! by the picker; the remaining variants belong to configuration loading and
//! standalone normalization.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathpick error.
///
/// # Examples
///
/// ```
/// use pathpick::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("src/main.rs")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathpick library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input line could not be interpreted as text.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },

    /// A path could not be anchored on the filesystem.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or environment variable that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error was caused by malformed caller input.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathpick::Error;
    ///
    /// let err = Error::InvalidArgument { reason: "not UTF-8".into() };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
