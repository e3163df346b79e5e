//! Query cache settings.

use serde::{Deserialize, Serialize};

/// Default freshness window in seconds.
const fn default_stale_after_secs() -> u64 {
    30
}

/// Default cache capacity.
const fn default_max_entries() -> usize {
    512
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Entries older than this are refetched on next read.
    #[serde(default = "default_stale_after_secs")]
    pub stale_after_secs: u64,

    /// Oldest entries are evicted past this many.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_after_secs: default_stale_after_secs(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn stale_after(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.stale_after_secs)
    }
}
