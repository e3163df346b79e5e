use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityPayload, EntityRecord};
use crate::enums::{CharacterKind, EntityType};
use crate::ids::EntityId;
use crate::rich_text::fill_plain_text;

/// A player character or NPC.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Character {
    pub id: EntityId,
    pub game_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub kind: CharacterKind,
    #[serde(default)]
    pub description: Option<String>,
    /// Serialized rich-text document.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub content_plain_text: Option<String>,
    #[serde(deserialize_with = "crate::timestamp::lenient::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::lenient::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub updated_at: DateTime<Utc>,
}

impl EntityRecord for Character {
    const ENTITY_TYPE: EntityType = EntityType::Character;

    fn into_entity(self) -> Entity {
        Entity::Character(self)
    }
}

/// Body of `POST /games/{game_id}/characters`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CharacterCreate {
    #[schemars(length(min = 1, max = 120))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CharacterKind>,
    /// Short summary shown in link tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 4000))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 100_000))]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub content_plain_text: Option<String>,
}

impl EntityPayload for CharacterCreate {
    type Record = Character;

    fn prepare(&mut self) {
        fill_plain_text(self.content.as_deref(), &mut self.content_plain_text);
    }
}

/// Body of `PATCH /games/{game_id}/characters/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CharacterUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CharacterKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 4000))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 100_000))]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub content_plain_text: Option<String>,
}

impl EntityPayload for CharacterUpdate {
    type Record = Character;

    fn prepare(&mut self) {
        fill_plain_text(self.content.as_deref(), &mut self.content_plain_text);
    }
}
