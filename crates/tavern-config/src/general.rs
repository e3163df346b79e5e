//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Game used when `--game` is not passed.
    #[serde(default)]
    pub default_game: String,

    /// Default result limit for list/search commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_game: String::new(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn default_game(&self) -> Option<&str> {
        Some(self.default_game.as_str()).filter(|g| !g.is_empty())
    }
}
