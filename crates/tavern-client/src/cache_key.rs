//! Hierarchical cache keys.

use std::fmt;

use tavern_core::enums::EntityType;
use tavern_core::ids::EntityId;

/// Path-like key into the [`crate::QueryCache`].
///
/// Keys nest so a prefix names a whole family:
///
/// | key | segments |
/// |---|---|
/// | game list | `games` |
/// | game | `game/{g}` |
/// | type scope | `game/{g}/{plural}` |
/// | entity lists | `game/{g}/{plural}/list` |
/// | entity list page | `game/{g}/{plural}/list/{limit or "all"}` |
/// | entity | `game/{g}/{plural}/detail/{id}` |
/// | links | `game/{g}/{plural}/links/{id}` |
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(Vec<String>);

impl CacheKey {
    #[must_use]
    pub fn game_list() -> Self {
        Self(vec!["games".to_string()])
    }

    #[must_use]
    pub fn game(game_id: &str) -> Self {
        Self(vec!["game".to_string(), game_id.to_string()])
    }

    /// Every key for one entity type inside a game.
    #[must_use]
    pub fn entity_scope(game_id: &str, entity_type: EntityType) -> Self {
        let mut key = Self::game(game_id);
        key.0.push(entity_type.plural().to_string());
        key
    }

    #[must_use]
    pub fn entity_list(game_id: &str, entity_type: EntityType) -> Self {
        Self::entity_scope(game_id, entity_type).join("list")
    }

    /// One listing of a type, keyed by its row limit.
    #[must_use]
    pub fn entity_page(game_id: &str, entity_type: EntityType, limit: Option<usize>) -> Self {
        let page = limit.map_or_else(|| "all".to_string(), |limit| limit.to_string());
        Self::entity_list(game_id, entity_type).join(&page)
    }

    #[must_use]
    pub fn entity(game_id: &str, entity_type: EntityType, entity_id: &EntityId) -> Self {
        Self::entity_scope(game_id, entity_type)
            .join("detail")
            .join(&entity_id.to_string())
    }

    #[must_use]
    pub fn links(game_id: &str, entity_type: EntityType, entity_id: &EntityId) -> Self {
        Self::entity_scope(game_id, entity_type)
            .join("links")
            .join(&entity_id.to_string())
    }

    /// Whether this is a links listing of any entity inside `game_id`.
    #[must_use]
    pub fn is_links_in(&self, game_id: &str) -> bool {
        matches!(
            self.0.as_slice(),
            [root, game, _, kind, _] if root == "game" && game == game_id && kind == "links"
        )
    }

    /// Append one segment.
    #[must_use]
    pub fn join(mut self, segment: &str) -> Self {
        self.0.push(segment.to_string());
        self
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix` names this key or one of its ancestors.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}
