//! Unified error types and result handling.
//!
//! Lookup misses are not errors anywhere in this crate: they come back as
//! `None` or `false`. The variants below cover form validation, configuration
//! loading and the advisor's HTTP plumbing.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A form or constructor rejected its input
    #[error("Validation error: {message}")]
    Validation {
        /// Which field failed and why
        message: String,
    },

    /// An amount typed at the boundary was blank or not a whole number
    #[error("Invalid amount: '{input}'")]
    InvalidAmount {
        /// The raw text as typed
        input: String,
    },

    /// Another catalog entry already carries this barcode
    #[error("Barcode '{barcode}' is already assigned to another product")]
    DuplicateBarcode {
        /// The conflicting code
        barcode: String,
    },

    /// No credential for the text-generation service was found in the environment
    #[error("Advisor API key is not configured")]
    MissingApiKey,

    /// The text-generation service answered with a failure
    #[error("Advisor error: {message}")]
    Advisor {
        /// User-friendly description of the failure
        message: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
