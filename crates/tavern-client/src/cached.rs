//! Cache-aware facade over [`ApiClient`].
//!
//! Reads go through the [`QueryCache`]; writes go straight to the server and
//! then invalidate the keys they made stale.

use std::sync::Arc;

use tavern_config::TavernConfig;
use tavern_core::entities::{Entity, EntityPayload, EntityRecord, Game, GameCreate, GameUpdate};
use tavern_core::enums::EntityType;
use tavern_core::ids::EntityId;
use tavern_core::links::{EntityLinks, LinkRecord, aggregate};

use crate::cache::QueryCache;
use crate::cache_key::CacheKey;
use crate::client::ApiClient;
use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::links::EntityRef;
use crate::resolver::EntityQuery;

#[derive(Debug)]
pub struct CachedClient {
    api: ApiClient,
    cache: QueryCache,
    credentials: Credentials,
}

impl CachedClient {
    #[must_use]
    pub const fn new(api: ApiClient, cache: QueryCache, credentials: Credentials) -> Self {
        Self {
            api,
            cache,
            credentials,
        }
    }

    /// Client, cache and credentials from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &TavernConfig) -> Result<Self, ApiError> {
        Ok(Self::new(
            ApiClient::new(&config.api)?,
            QueryCache::from_config(&config.cache),
            Credentials::from_config(&config.api),
        ))
    }

    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // -- reads ---------------------------------------------------------------

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn games(&self) -> Result<Arc<Vec<Game>>, ApiError> {
        self.cache
            .get_or_fetch(&CacheKey::game_list(), || {
                self.api.list_games(&self.credentials)
            })
            .await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn game(&self, game_id: &str) -> Result<Arc<Game>, ApiError> {
        self.cache
            .get_or_fetch(&CacheKey::game(game_id), || {
                self.api.get_game(&self.credentials, game_id)
            })
            .await
    }

    /// Fetch a resolved entity.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn entity(&self, query: &EntityQuery) -> Result<Arc<Entity>, ApiError> {
        query
            .fetch_cached(&self.cache, &self.api, &self.credentials)
            .await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn list<R: EntityRecord>(
        &self,
        game_id: &str,
        limit: Option<usize>,
    ) -> Result<Arc<Vec<R>>, ApiError> {
        let key = CacheKey::entity_page(game_id, R::ENTITY_TYPE, limit);
        self.cache
            .get_or_fetch(&key, || self.api.list::<R>(&self.credentials, game_id, limit))
            .await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn links(&self, game_id: &str, entity: &EntityRef) -> Result<Arc<EntityLinks>, ApiError> {
        let key = CacheKey::links(game_id, entity.entity_type, &entity.id);
        self.cache
            .get_or_fetch(&key, || self.api.get_links(&self.credentials, game_id, entity))
            .await
    }

    /// Links of `entity` flattened into one table, newest first.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn link_table(&self, game_id: &str, entity: &EntityRef) -> Result<Vec<LinkRecord>, ApiError> {
        let links = self.links(game_id, entity).await?;
        Ok(aggregate(&links))
    }

    // -- entity writes -------------------------------------------------------

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server. Nothing is invalidated on
    /// failure.
    pub async fn create<P: EntityPayload>(&self, game_id: &str, payload: P) -> Result<P::Record, ApiError> {
        let record = self.api.create(&self.credentials, game_id, payload).await?;
        self.cache
            .invalidate_prefix(&CacheKey::entity_scope(game_id, P::Record::ENTITY_TYPE));
        Ok(record)
    }

    /// Update an entity. Its own type scope is dropped along with every
    /// links listing in the game, since those embed its name and timestamps.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn update<P: EntityPayload>(
        &self,
        game_id: &str,
        id: &EntityId,
        payload: P,
    ) -> Result<P::Record, ApiError> {
        let record = self
            .api
            .update(&self.credentials, game_id, id, payload)
            .await?;
        self.invalidate_entity(game_id, P::Record::ENTITY_TYPE);
        Ok(record)
    }

    /// Delete an entity. Same invalidation as [`Self::update`].
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn delete(&self, entity_type: EntityType, game_id: &str, id: &EntityId) -> Result<(), ApiError> {
        self.api
            .delete_entity(&self.credentials, entity_type, game_id, id)
            .await?;
        self.invalidate_entity(game_id, entity_type);
        Ok(())
    }

    fn invalidate_entity(&self, game_id: &str, entity_type: EntityType) {
        self.cache
            .invalidate_prefix(&CacheKey::entity_scope(game_id, entity_type));
        let links = self
            .cache
            .invalidate_matching(|key| key.is_links_in(game_id));
        tracing::debug!(game_id, links, "dropped links listings");
    }

    // -- links ---------------------------------------------------------------

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn link(&self, game_id: &str, source: &EntityRef, target: &EntityRef) -> Result<(), ApiError> {
        self.api
            .link(&self.credentials, game_id, source, target)
            .await?;
        self.invalidate_links(game_id, source, target);
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn unlink(&self, game_id: &str, source: &EntityRef, target: &EntityRef) -> Result<(), ApiError> {
        self.api
            .unlink(&self.credentials, game_id, source, target)
            .await?;
        self.invalidate_links(game_id, source, target);
        Ok(())
    }

    fn invalidate_links(&self, game_id: &str, source: &EntityRef, target: &EntityRef) {
        for end in [source, target] {
            self.cache
                .invalidate(&CacheKey::links(game_id, end.entity_type, &end.id));
        }
    }

    // -- game writes ---------------------------------------------------------

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn create_game(&self, payload: &GameCreate) -> Result<Game, ApiError> {
        let game = self.api.create_game(&self.credentials, payload).await?;
        self.cache.invalidate(&CacheKey::game_list());
        Ok(game)
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn update_game(&self, game_id: &str, payload: &GameUpdate) -> Result<Game, ApiError> {
        let game = self
            .api
            .update_game(&self.credentials, game_id, payload)
            .await?;
        self.cache.invalidate(&CacheKey::game_list());
        self.cache.invalidate(&CacheKey::game(game_id));
        Ok(game)
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the server.
    pub async fn delete_game(&self, game_id: &str) -> Result<(), ApiError> {
        self.api.delete_game(&self.credentials, game_id).await?;
        self.cache.invalidate(&CacheKey::game_list());
        self.cache.invalidate_prefix(&CacheKey::game(game_id));
        Ok(())
    }
}
