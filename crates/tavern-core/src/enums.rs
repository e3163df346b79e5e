//! Entity types and per-entity enums for Tavern.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`EntityType`] is the closed dispatch set: every `match` over it is
//! exhaustive, so a new entity kind fails to compile wherever dispatch is
//! missing.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Kind of campaign entity owned by a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Character,
    Faction,
    Location,
    Note,
    Quest,
}

impl EntityType {
    /// Every entity type, in link-collection order
    /// (characters, factions, notes, locations, quests).
    pub const ALL: [Self; 5] = [
        Self::Character,
        Self::Faction,
        Self::Note,
        Self::Location,
        Self::Quest,
    ];

    /// Singular label, used as the `type` column of link tables and as the
    /// serialized tag.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Faction => "faction",
            Self::Location => "location",
            Self::Note => "note",
            Self::Quest => "quest",
        }
    }

    /// Plural collection key, used as the URL segment and the key in link
    /// collections.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Faction => "factions",
            Self::Location => "locations",
            Self::Note => "notes",
            Self::Quest => "quests",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.singular()
    }

    /// Look up an entity type by its plural collection key.
    #[must_use]
    pub fn from_plural(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.plural() == key)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = CoreError;

    /// Parse a singular tag (`"character"`). Plural keys are accepted too so
    /// that `tav entity list characters` reads naturally.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.singular() == normalized)
            .or_else(|| Self::from_plural(&normalized))
            .ok_or_else(|| CoreError::UnsupportedEntityType(tag.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CharacterKind
// ---------------------------------------------------------------------------

/// Whether a character is played by someone at the table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    Player,
    #[default]
    NonPlayer,
}

impl CharacterKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::NonPlayer => "non_player",
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuestStatus
// ---------------------------------------------------------------------------

/// Progress of a quest.
///
/// ```text
/// rumored → active → completed
///                  → failed
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Rumored,
    #[default]
    Active,
    Completed,
    Failed,
}

impl QuestStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Rumored => &[Self::Active],
            Self::Active => &[Self::Completed, Self::Failed],
            Self::Completed | Self::Failed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rumored => "rumored",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
