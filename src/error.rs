//! Error types for pagelink
//!
//! All fallible public APIs return `Result<T, Error>` where Error is defined
//! here. Every failure is a deterministic function of the inputs; none are
//! transient, and none leave the assembler in a corrupted state.

use thiserror::Error;

/// The main error type for pagelink
#[derive(Error, Debug)]
pub enum Error {
    /// A configured or supplied base URI could not be parsed as absolute.
    #[error("Invalid base URI '{uri}': {source}")]
    InvalidBaseUri {
        /// The URI string as supplied by the caller
        uri: String,
        /// The underlying parse failure
        #[source]
        source: url::ParseError,
    },

    /// A precondition on a public operation was violated.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },
}

impl Error {
    /// Create an invalid base URI error
    pub fn invalid_base_uri(uri: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidBaseUri {
            uri: uri.into(),
            source,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for pagelink
pub type Result<T> = std::result::Result<T, Error>;
