//! Cross-reference aggregation.
//!
//! The server answers `GET …/{id}/links` with one lightweight reference list
//! per entity kind. Tables want a single list instead, labeled by kind and
//! ordered by recency. [`aggregate`] does that flattening.

use std::cmp::Reverse;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntityType;
use crate::ids::EntityId;
use crate::timestamp::parse_timestamp;

/// Lightweight reference to a linked entity, as served inside [`EntityLinks`].
///
/// Only `id` is required. Everything else degrades to absent/empty so one
/// malformed record never fails the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LinkRef {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Linked entities grouped by kind. Every key is always present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntityLinks {
    #[serde(default)]
    pub characters: Vec<LinkRef>,
    #[serde(default)]
    pub factions: Vec<LinkRef>,
    #[serde(default)]
    pub notes: Vec<LinkRef>,
    #[serde(default)]
    pub locations: Vec<LinkRef>,
    #[serde(default)]
    pub quests: Vec<LinkRef>,
}

impl EntityLinks {
    /// The reference list for one entity kind.
    #[must_use]
    pub fn of_type(&self, entity_type: EntityType) -> &[LinkRef] {
        match entity_type {
            EntityType::Character => &self.characters,
            EntityType::Faction => &self.factions,
            EntityType::Location => &self.locations,
            EntityType::Note => &self.notes,
            EntityType::Quest => &self.quests,
        }
    }

    /// Total number of references across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        EntityType::ALL
            .iter()
            .map(|ty| self.of_type(*ty).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One row of a flattened link table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl LinkRecord {
    fn from_ref(entity_type: EntityType, link: &LinkRef) -> Self {
        Self {
            id: link.id.clone(),
            name: link.name.clone(),
            entity_type,
            description: link.description.clone(),
            content: link.content.clone(),
            created_at: link.created_at.clone().unwrap_or_default(),
            updated_at: link.updated_at.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST …/{id}/links`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LinkRequest {
    pub target_type: EntityType,
    pub target_id: EntityId,
}

/// Flatten grouped links into one table, most recently updated first.
///
/// Rows are emitted kind by kind (characters, factions, notes, locations,
/// quests), then stable-sorted by `updated_at` descending. Rows whose
/// timestamp is empty or unparsable sort after every dated row and keep their
/// emission order among themselves. Output length always equals
/// [`EntityLinks::len`].
#[must_use]
pub fn aggregate(links: &EntityLinks) -> Vec<LinkRecord> {
    let mut records: Vec<LinkRecord> = EntityType::ALL
        .into_iter()
        .flat_map(|ty| {
            links
                .of_type(ty)
                .iter()
                .map(move |link| LinkRecord::from_ref(ty, link))
        })
        .collect();

    // `None` < `Some`, so under `Reverse` undated rows land last.
    records.sort_by_cached_key(|record| Reverse(parse_timestamp(&record.updated_at)));
    records
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn link(id: i64, name: &str, updated_at: Option<&str>) -> LinkRef {
        LinkRef {
            id: EntityId::Int(id),
            name: name.to_string(),
            description: None,
            content: None,
            created_at: None,
            updated_at: updated_at.map(str::to_string),
        }
    }

    #[test]
    fn example_scenario() {
        let links = EntityLinks {
            characters: vec![link(1, "Ana", Some("2024-01-02"))],
            factions: vec![link(2, "Red Hand", Some("2024-01-05"))],
            ..EntityLinks::default()
        };

        let records = aggregate(&links);
        let summary: Vec<(String, &str, EntityType, &str)> = records
            .iter()
            .map(|r| {
                (
                    r.id.to_string(),
                    r.name.as_str(),
                    r.entity_type,
                    r.updated_at.as_str(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            vec![
                ("2".to_string(), "Red Hand", EntityType::Faction, "2024-01-05"),
                ("1".to_string(), "Ana", EntityType::Character, "2024-01-02"),
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(aggregate(&EntityLinks::default()).is_empty());
        assert!(EntityLinks::default().is_empty());
    }

    #[test]
    fn missing_timestamps_default_to_empty_and_sort_last() {
        let links = EntityLinks {
            notes: vec![link(1, "undated", None), link(2, "garbage", Some("soon"))],
            quests: vec![link(3, "ancient", Some("1066-10-14"))],
            ..EntityLinks::default()
        };

        let records = aggregate(&links);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["ancient", "undated", "garbage"]);
        assert_eq!(records[1].updated_at, "");
        assert_eq!(records[1].created_at, "");
        assert_eq!(records[2].updated_at, "soon");
    }

    #[test]
    fn equal_timestamps_keep_emission_order() {
        let same = Some("2024-06-01T00:00:00Z");
        let links = EntityLinks {
            characters: vec![link(1, "c", same)],
            factions: vec![link(2, "f", same)],
            notes: vec![link(3, "n", same)],
            locations: vec![link(4, "l", same)],
            quests: vec![link(5, "q", same)],
        };

        let types: Vec<EntityType> = aggregate(&links).iter().map(|r| r.entity_type).collect();
        assert_eq!(types, EntityType::ALL.to_vec());
    }

    #[test]
    fn mixed_formats_compare_as_instants() {
        let links = EntityLinks {
            characters: vec![link(1, "date-only", Some("2024-01-02"))],
            locations: vec![link(2, "offset", Some("2024-01-02T01:00:00+02:00"))],
            quests: vec![link(3, "naive", Some("2024-01-01 23:30:00"))],
            ..EntityLinks::default()
        };

        let names: Vec<String> = aggregate(&links).into_iter().map(|r| r.name).collect();
        // 2024-01-02T00:00Z > 2024-01-01T23:30Z > 2024-01-01T23:00Z
        assert_eq!(names, ["date-only", "naive", "offset"]);
    }

    #[test]
    fn optional_fields_are_passed_through_as_is() {
        let links: EntityLinks = serde_json::from_str(
            r#"{
                "characters": [{"id": 1, "name": "Ana", "description": "Scout"}],
                "notes": [{"id": "n-1", "name": "Log", "content": ""}]
            }"#,
        )
        .unwrap();

        let records = aggregate(&links);
        let ana = records.iter().find(|r| r.name == "Ana").unwrap();
        assert_eq!(ana.description.as_deref(), Some("Scout"));
        assert!(ana.content.is_none());

        let log = records.iter().find(|r| r.name == "Log").unwrap();
        assert!(log.description.is_none());
        assert_eq!(log.content.as_deref(), Some(""));

        let json = serde_json::to_value(ana).unwrap();
        assert_eq!(json["type"], "character");
        assert_eq!(json["description"], "Scout");
        assert!(json.get("content").is_none());
    }

    #[test]
    fn missing_keys_deserialize_as_empty() {
        let links: EntityLinks = serde_json::from_str(r#"{"quests": []}"#).unwrap();
        assert_eq!(links, EntityLinks::default());
    }
}
