//! Compendium error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompendiumError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset did not parse. `origin` is a path or `bundled`.
    #[error("Failed to parse {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error("Invalid challenge rating: {0}")]
    InvalidChallengeRating(String),

    #[error("Duplicate {kind} entry: {name}")]
    Duplicate { kind: &'static str, name: String },
}
