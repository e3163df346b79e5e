//! Entity-type resolution.
//!
//! Turns a (game, type, id) triple into an [`EntityQuery`]: a cache key plus
//! a fetch that dispatches to the matching typed read. Unknown type tags and
//! blank identifiers are rejected here, before any request is made.

use std::str::FromStr;
use std::sync::Arc;

use tavern_core::entities::{Entity, EntityRecord};
use tavern_core::enums::EntityType;
use tavern_core::errors::CoreError;
use tavern_core::ids::EntityId;

use crate::cache::QueryCache;
use crate::cache_key::CacheKey;
use crate::credentials::Credentials;
use crate::entities::EntitySource;
use crate::error::ApiError;

/// A resolved single-entity read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityQuery {
    pub entity_type: EntityType,
    pub game_id: String,
    pub entity_id: EntityId,
    pub key: CacheKey,
}

/// Resolve a typed triple.
///
/// # Errors
///
/// Returns [`CoreError::EmptyIdentifier`] if the game or entity id is blank.
pub fn resolve(
    game_id: &str,
    entity_type: EntityType,
    entity_id: impl Into<EntityId>,
) -> Result<EntityQuery, CoreError> {
    let entity_id = entity_id.into();
    if game_id.trim().is_empty() {
        return Err(CoreError::EmptyIdentifier { field: "game_id" });
    }
    if entity_id.is_blank() {
        return Err(CoreError::EmptyIdentifier { field: "entity_id" });
    }
    Ok(EntityQuery {
        key: CacheKey::entity(game_id, entity_type, &entity_id),
        entity_type,
        game_id: game_id.to_string(),
        entity_id,
    })
}

/// Resolve a triple whose type arrives as a string tag (`"quest"`,
/// `"quests"`, ...).
///
/// # Errors
///
/// Returns [`CoreError::UnsupportedEntityType`] for a tag outside the closed
/// set, or the errors of [`resolve`].
pub fn resolve_tag(
    game_id: &str,
    tag: &str,
    entity_id: impl Into<EntityId>,
) -> Result<EntityQuery, CoreError> {
    let entity_type = EntityType::from_str(tag)?;
    resolve(game_id, entity_type, entity_id)
}

impl EntityQuery {
    /// Perform exactly one read against `source` and wrap the record.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ApiError`] the source produced.
    pub async fn fetch<S: EntitySource>(
        &self,
        source: &S,
        credentials: &Credentials,
    ) -> Result<Entity, ApiError> {
        let (game, id) = (self.game_id.as_str(), &self.entity_id);
        tracing::debug!(entity_type = %self.entity_type, game, %id, "fetch entity");
        let entity = match self.entity_type {
            EntityType::Character => source
                .fetch_character(credentials, game, id)
                .await?
                .into_entity(),
            EntityType::Faction => source
                .fetch_faction(credentials, game, id)
                .await?
                .into_entity(),
            EntityType::Location => source
                .fetch_location(credentials, game, id)
                .await?
                .into_entity(),
            EntityType::Note => source.fetch_note(credentials, game, id).await?.into_entity(),
            EntityType::Quest => source.fetch_quest(credentials, game, id).await?.into_entity(),
        };
        Ok(entity)
    }

    /// [`Self::fetch`] through `cache`, keyed by [`Self::key`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch`]. Failures are not cached.
    pub async fn fetch_cached<S: EntitySource>(
        &self,
        cache: &QueryCache,
        source: &S,
        credentials: &Credentials,
    ) -> Result<Arc<Entity>, ApiError> {
        cache
            .get_or_fetch(&self.key, || self.fetch(source, credentials))
            .await
    }
}
