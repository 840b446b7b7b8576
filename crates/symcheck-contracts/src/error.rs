//! Error types for the symcheck engine and its edges.
//!
//! Scoring itself is total over its input domain. Errors only arise where
//! data crosses a boundary: loading a knowledge table, parsing a caller's
//! request, or verifying a finished result.

use thiserror::Error;

/// The unified error type for the symcheck crates.
#[derive(Debug, Error)]
pub enum SymcheckError {
    /// A knowledge table file is missing, unreadable, or inconsistent.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// Caller-supplied input could not be parsed or failed boundary validation.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A finished analysis result broke one or more output invariants.
    #[error("result verification failed: {reason}")]
    VerificationFailed { reason: String },

    /// The serialized result did not match the published result schema.
    #[error("schema validation error: {reason}")]
    SchemaValidation { reason: String },
}

/// Convenience alias used throughout the symcheck crates.
pub type SymcheckResult<T> = Result<T, SymcheckError>;
