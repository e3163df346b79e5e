//! Entity structs for every Tavern domain object.
//!
//! Each record mirrors a resource of the campaign server. Records carry the
//! server-assigned fields; `*Create` / `*Update` payloads carry only what a
//! client may send and derive `JsonSchema` so forms can be synthesized from
//! them.

mod character;
mod entity;
mod faction;
mod game;
mod location;
mod note;
mod quest;

pub use character::{Character, CharacterCreate, CharacterUpdate};
pub use entity::Entity;
pub use faction::{Faction, FactionCreate, FactionUpdate};
pub use game::{Game, GameCreate, GameUpdate};
pub use location::{Location, LocationCreate, LocationUpdate};
pub use note::{Note, NoteCreate, NoteUpdate};
pub use quest::{Quest, QuestCreate, QuestUpdate};

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::enums::EntityType;

/// A record stored under `/games/{game_id}/{plural}`.
pub trait EntityRecord: Serialize + DeserializeOwned + Send + Sync + 'static {
    const ENTITY_TYPE: EntityType;

    /// Wrap the record in the [`Entity`] union.
    fn into_entity(self) -> Entity;
}

/// A request body for creating or updating an [`EntityRecord`].
pub trait EntityPayload: Serialize + JsonSchema + Send + Sync {
    type Record: EntityRecord;

    /// Fill derived fields the caller left empty (e.g. `content_plain_text`).
    fn prepare(&mut self);
}
