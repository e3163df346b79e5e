use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Character, Faction, Location, Note, Quest};
use crate::enums::EntityType;
use crate::ids::EntityId;

/// Any campaign entity, tagged with its [`EntityType`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "entity_type", rename_all = "snake_case")]
pub enum Entity {
    Character(Character),
    Faction(Faction),
    Location(Location),
    Note(Note),
    Quest(Quest),
}

impl Entity {
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        match self {
            Self::Character(_) => EntityType::Character,
            Self::Faction(_) => EntityType::Faction,
            Self::Location(_) => EntityType::Location,
            Self::Note(_) => EntityType::Note,
            Self::Quest(_) => EntityType::Quest,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &EntityId {
        match self {
            Self::Character(e) => &e.id,
            Self::Faction(e) => &e.id,
            Self::Location(e) => &e.id,
            Self::Note(e) => &e.id,
            Self::Quest(e) => &e.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Character(e) => &e.name,
            Self::Faction(e) => &e.name,
            Self::Location(e) => &e.name,
            Self::Note(e) => &e.name,
            Self::Quest(e) => &e.name,
        }
    }

    /// Serialized rich-text body, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Character(e) => e.content.as_deref(),
            Self::Faction(e) => e.content.as_deref(),
            Self::Location(e) => e.content.as_deref(),
            Self::Note(e) => e.content.as_deref(),
            Self::Quest(e) => e.content.as_deref(),
        }
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Character(e) => e.created_at,
            Self::Faction(e) => e.created_at,
            Self::Location(e) => e.created_at,
            Self::Note(e) => e.created_at,
            Self::Quest(e) => e.created_at,
        }
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Self::Character(e) => e.updated_at,
            Self::Faction(e) => e.updated_at,
            Self::Location(e) => e.updated_at,
            Self::Note(e) => e.updated_at,
            Self::Quest(e) => e.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE_JSON: &str = r#"{
        "id": 9,
        "game_id": "g-1",
        "name": "Session 3",
        "content": "{\"type\":\"doc\",\"content\":[]}",
        "content_plain_text": "",
        "created_at": "2024-01-02",
        "updated_at": "2024-01-03 18:45:00"
    }"#;

    #[test]
    fn record_parses_lenient_timestamps() {
        let note: Note = serde_json::from_str(NOTE_JSON).unwrap();
        assert_eq!(note.id, EntityId::Int(9));
        assert_eq!(note.updated_at.to_rfc3339(), "2024-01-03T18:45:00+00:00");
    }

    #[test]
    fn accessors_reach_through_variants() {
        let note: Note = serde_json::from_str(NOTE_JSON).unwrap();
        let entity = Entity::Note(note);
        assert_eq!(entity.entity_type(), EntityType::Note);
        assert_eq!(entity.name(), "Session 3");
        assert_eq!(entity.id().to_string(), "9");
        assert!(entity.content().is_some());
        assert!(entity.updated_at() > entity.created_at());
    }

    #[test]
    fn serialized_entity_is_tagged() {
        let note: Note = serde_json::from_str(NOTE_JSON).unwrap();
        let value = serde_json::to_value(Entity::Note(note)).unwrap();
        assert_eq!(value["entity_type"], "note");
        assert_eq!(value["name"], "Session 3");
    }
}
