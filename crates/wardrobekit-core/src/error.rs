//! Error handling for WardrobeKit
//!
//! The geometry and production engines never fail: they degrade to `None`,
//! defaults or empty results. Errors only exist at the edges where data is
//! loaded, saved or validated.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for WardrobeKit
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value failed validation
    #[error("Invalid configuration '{key}': {reason}")]
    InvalidConfig {
        /// Dotted path of the offending key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a validation error for a configuration key
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a configuration validation error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::InvalidConfig { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
