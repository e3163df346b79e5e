//! Link endpoints: `/games/{game_id}/{plural}/{id}/links`.

use tavern_core::enums::EntityType;
use tavern_core::ids::EntityId;
use tavern_core::links::{EntityLinks, LinkRequest};

use crate::client::ApiClient;
use crate::credentials::Credentials;
use crate::error::ApiError;

/// One end of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub entity_type: EntityType,
    pub id: EntityId,
}

impl EntityRef {
    #[must_use]
    pub fn new(entity_type: EntityType, id: impl Into<EntityId>) -> Self {
        Self {
            entity_type,
            id: id.into(),
        }
    }
}

impl ApiClient {
    /// Everything linked to `entity`, grouped by kind.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_links(
        &self,
        credentials: &Credentials,
        game_id: &str,
        entity: &EntityRef,
    ) -> Result<EntityLinks, ApiError> {
        let id = entity.id.to_string();
        self.get_json(
            credentials,
            &["games", game_id, entity.entity_type.plural(), &id, "links"],
            &[],
        )
        .await
    }

    /// Link `source` to `target`. Links are symmetric on the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server returns a
    /// non-success status.
    pub async fn link(
        &self,
        credentials: &Credentials,
        game_id: &str,
        source: &EntityRef,
        target: &EntityRef,
    ) -> Result<(), ApiError> {
        let id = source.id.to_string();
        let body = LinkRequest {
            target_type: target.entity_type,
            target_id: target.id.clone(),
        };
        self.post_unit(
            credentials,
            &["games", game_id, source.entity_type.plural(), &id, "links"],
            &body,
        )
        .await
    }

    /// Remove the link between `source` and `target`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::link`].
    pub async fn unlink(
        &self,
        credentials: &Credentials,
        game_id: &str,
        source: &EntityRef,
        target: &EntityRef,
    ) -> Result<(), ApiError> {
        let source_id = source.id.to_string();
        let target_id = target.id.to_string();
        self.delete(
            credentials,
            &[
                "games",
                game_id,
                source.entity_type.plural(),
                &source_id,
                "links",
                target.entity_type.plural(),
                &target_id,
            ],
        )
        .await
    }
}
