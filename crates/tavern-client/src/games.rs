//! Game endpoints: `/games[/{game_id}]`.

use tavern_core::entities::{Game, GameCreate, GameUpdate};

use crate::client::ApiClient;
use crate::credentials::Credentials;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /games`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list_games(&self, credentials: &Credentials) -> Result<Vec<Game>, ApiError> {
        self.get_json(credentials, &["games"], &[]).await
    }

    /// `GET /games/{game_id}`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_games`].
    pub async fn get_game(&self, credentials: &Credentials, game_id: &str) -> Result<Game, ApiError> {
        self.get_json(credentials, &["games", game_id], &[]).await
    }

    /// `POST /games`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_games`].
    pub async fn create_game(
        &self,
        credentials: &Credentials,
        payload: &GameCreate,
    ) -> Result<Game, ApiError> {
        self.post_json(credentials, &["games"], payload).await
    }

    /// `PATCH /games/{game_id}`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_games`].
    pub async fn update_game(
        &self,
        credentials: &Credentials,
        game_id: &str,
        payload: &GameUpdate,
    ) -> Result<Game, ApiError> {
        self.patch_json(credentials, &["games", game_id], payload)
            .await
    }

    /// `DELETE /games/{game_id}`. Removes every entity in the game too.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server returns a
    /// non-success status.
    pub async fn delete_game(&self, credentials: &Credentials, game_id: &str) -> Result<(), ApiError> {
        self.delete(credentials, &["games", game_id]).await
    }
}
