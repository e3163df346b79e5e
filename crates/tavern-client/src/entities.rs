//! Typed entity endpoints: `/games/{game_id}/{plural}[/{id}]`.

use std::future::Future;

use tavern_core::entities::{
    Character, EntityPayload, EntityRecord, Faction, Location, Note, Quest,
};
use tavern_core::enums::EntityType;
use tavern_core::ids::EntityId;

use crate::client::ApiClient;
use crate::credentials::Credentials;
use crate::error::ApiError;

/// The five typed single-entity reads.
///
/// [`ApiClient`] implements this against the server; the resolver only
/// depends on the trait so it can be driven by in-memory sources.
pub trait EntitySource: Sync {
    fn fetch_character(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> impl Future<Output = Result<Character, ApiError>> + Send;

    fn fetch_faction(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> impl Future<Output = Result<Faction, ApiError>> + Send;

    fn fetch_location(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> impl Future<Output = Result<Location, ApiError>> + Send;

    fn fetch_note(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> impl Future<Output = Result<Note, ApiError>> + Send;

    fn fetch_quest(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> impl Future<Output = Result<Quest, ApiError>> + Send;
}

impl ApiClient {
    /// `GET /games/{game_id}/{plural}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server returns a
    /// non-success status, or the body does not parse as `R`.
    pub async fn get<R: EntityRecord>(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> Result<R, ApiError> {
        let id = id.to_string();
        self.get_json(
            credentials,
            &["games", game_id, R::ENTITY_TYPE.plural(), &id],
            &[],
        )
        .await
    }

    /// `GET /games/{game_id}/{plural}`, optionally capped at `limit` rows.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn list<R: EntityRecord>(
        &self,
        credentials: &Credentials,
        game_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<R>, ApiError> {
        let query: Vec<(&str, String)> = limit
            .map(|limit| ("limit", limit.to_string()))
            .into_iter()
            .collect();
        self.get_json(
            credentials,
            &["games", game_id, R::ENTITY_TYPE.plural()],
            &query,
        )
        .await
    }

    /// `POST /games/{game_id}/{plural}`. Derived fields the payload left
    /// empty are filled before sending.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn create<P: EntityPayload>(
        &self,
        credentials: &Credentials,
        game_id: &str,
        mut payload: P,
    ) -> Result<P::Record, ApiError> {
        payload.prepare();
        self.post_json(
            credentials,
            &["games", game_id, P::Record::ENTITY_TYPE.plural()],
            &payload,
        )
        .await
    }

    /// `PATCH /games/{game_id}/{plural}/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn update<P: EntityPayload>(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
        mut payload: P,
    ) -> Result<P::Record, ApiError> {
        payload.prepare();
        let id = id.to_string();
        self.patch_json(
            credentials,
            &["games", game_id, P::Record::ENTITY_TYPE.plural(), &id],
            &payload,
        )
        .await
    }

    /// `DELETE /games/{game_id}/{plural}/{id}`.
    ///
    /// Takes the type as a value since deleting needs no record shape.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server returns a
    /// non-success status.
    pub async fn delete_entity(
        &self,
        credentials: &Credentials,
        entity_type: EntityType,
        game_id: &str,
        id: &EntityId,
    ) -> Result<(), ApiError> {
        let id = id.to_string();
        self.delete(credentials, &["games", game_id, entity_type.plural(), &id])
            .await
    }
}

impl EntitySource for ApiClient {
    async fn fetch_character(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> Result<Character, ApiError> {
        self.get(credentials, game_id, id).await
    }

    async fn fetch_faction(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> Result<Faction, ApiError> {
        self.get(credentials, game_id, id).await
    }

    async fn fetch_location(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> Result<Location, ApiError> {
        self.get(credentials, game_id, id).await
    }

    async fn fetch_note(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> Result<Note, ApiError> {
        self.get(credentials, game_id, id).await
    }

    async fn fetch_quest(
        &self,
        credentials: &Credentials,
        game_id: &str,
        id: &EntityId,
    ) -> Result<Quest, ApiError> {
        self.get(credentials, game_id, id).await
    }
}
