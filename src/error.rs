//! Error types for password generation and the password vault.

use thiserror::Error;

/// Errors produced by the evolver, the vault and the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A configuration parameter is out of range.
    ///
    /// Raised before any computation begins.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable description of the constraint that was violated.
        reason: String,
    },

    /// A custom alphabet cannot be used for evolution.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// A password was saved without a purpose label.
    #[error("a purpose is required to save a password")]
    EmptyPurpose,

    /// A save was attempted before any password was generated.
    #[error("no password has been generated yet")]
    MissingPassword,
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
