use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityPayload, EntityRecord};
use crate::enums::EntityType;
use crate::ids::EntityId;
use crate::rich_text::fill_plain_text;

/// Free-form session notes. Unlike the other kinds, a note has no summary
/// `description`: its body is the rich-text `content`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Note {
    pub id: EntityId,
    pub game_id: EntityId,
    pub name: String,
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

impl EntityRecord for Note {
    const ENTITY_TYPE: EntityType = EntityType::Note;

    fn into_entity(self) -> Entity {
        Entity::Note(self)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NoteCreate {
    #[schemars(length(min = 1, max = 120))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 100_000))]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub content_plain_text: Option<String>,
}

impl EntityPayload for NoteCreate {
    type Record = Note;

    fn prepare(&mut self) {
        fill_plain_text(self.content.as_deref(), &mut self.content_plain_text);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NoteUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 100_000))]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub content_plain_text: Option<String>,
}

impl EntityPayload for NoteUpdate {
    type Record = Note;

    fn prepare(&mut self) {
        fill_plain_text(self.content.as_deref(), &mut self.content_plain_text);
    }
}
