//! Cross-cutting error types for Tavern.
//!
//! Transport failures (`ApiError`), configuration failures (`ConfigError`)
//! and form failures (`FormError`) live in their own crates. The binary
//! converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Tavern crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An entity-type tag outside the closed set was supplied. This is a
    /// caller bug, never retried.
    #[error("Unsupported entity type: {0}")]
    UnsupportedEntityType(String),

    /// A required identifier was empty.
    #[error("Empty identifier: {field}")]
    EmptyIdentifier { field: &'static str },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
