use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityPayload, EntityRecord};
use crate::enums::{EntityType, QuestStatus};
use crate::ids::EntityId;
use crate::rich_text::fill_plain_text;

/// A goal the party is pursuing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Quest {
    pub id: EntityId,
    pub game_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub status: QuestStatus,
    #[serde(default)]
    pub description: Option<String>,
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

impl EntityRecord for Quest {
    const ENTITY_TYPE: EntityType = EntityType::Quest;

    fn into_entity(self) -> Entity {
        Entity::Quest(self)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestCreate {
    #[schemars(length(min = 1, max = 120))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QuestStatus>,
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

impl EntityPayload for QuestCreate {
    type Record = Quest;

    fn prepare(&mut self) {
        fill_plain_text(self.content.as_deref(), &mut self.content_plain_text);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QuestStatus>,
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

impl EntityPayload for QuestUpdate {
    type Record = Quest;

    fn prepare(&mut self) {
        fill_plain_text(self.content.as_deref(), &mut self.content_plain_text);
    }
}
