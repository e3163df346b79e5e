//! Entity identifiers.
//!
//! The campaign server hands out identifiers that are either integers or
//! opaque strings depending on the table. [`EntityId`] keeps whichever form
//! arrived so it serializes back unchanged.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a game or entity, scoped to its parent game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl EntityId {
    /// True for an empty (or whitespace-only) string id.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::Str(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
