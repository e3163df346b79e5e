//! Reference data locations.

use serde::{Deserialize, Serialize};

/// Paths to spell and monster JSON files. Empty means "use the bundled
/// sample data".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompendiumConfig {
    #[serde(default)]
    pub spells_path: String,

    #[serde(default)]
    pub monsters_path: String,
}

impl CompendiumConfig {
    #[must_use]
    pub fn spells_override(&self) -> Option<&str> {
        Some(self.spells_path.as_str()).filter(|p| !p.is_empty())
    }

    #[must_use]
    pub fn monsters_override(&self) -> Option<&str> {
        Some(self.monsters_path.as_str()).filter(|p| !p.is_empty())
    }
}
