//! # tavern-config
//!
//! Layered configuration loading for Tavern using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TAVERN_*` prefix, `__` as separator)
//! 2. Project-level `.tavern/config.toml`
//! 3. User-level `~/.config/tavern/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TAVERN_API__BASE_URL` -> `api.base_url`,
//! `TAVERN_CACHE__MAX_ENTRIES` -> `cache.max_entries`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tavern_config::TavernConfig;
//!
//! let config = TavernConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.normalized_base_url());
//! ```

mod api;
mod cache;
mod compendium;
mod error;
mod general;

pub use api::ApiConfig;
pub use cache::CacheConfig;
pub use compendium::CompendiumConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TavernConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub compendium: CompendiumConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TavernConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tavern/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TAVERN_").split("__"))
    }

    /// Pick the game to operate on: the explicit flag, else the configured
    /// default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when neither is set.
    pub fn resolve_game<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str, ConfigError> {
        explicit
            .filter(|game| !game.trim().is_empty())
            .or_else(|| self.general.default_game())
            .ok_or_else(|| ConfigError::NotConfigured {
                section: "general.default_game".to_string(),
            })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tavern").join("config.toml"))
    }

    /// Load `.env` from the current directory or the nearest parent that has
    /// one. Silently does nothing if none is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
