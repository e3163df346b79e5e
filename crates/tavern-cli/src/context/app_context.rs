use anyhow::Context;
use tavern_client::CachedClient;
use tavern_config::TavernConfig;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: TavernConfig,
    pub client: CachedClient,
}

impl AppContext {
    pub fn init(config: TavernConfig) -> anyhow::Result<Self> {
        let client = CachedClient::from_config(&config)
            .with_context(|| format!("failed to build HTTP client for {}", config.api.normalized_base_url()))?;
        if !client.credentials().is_authenticated() {
            tracing::debug!("no api.token configured; requests are anonymous");
        }
        Ok(Self { config, client })
    }

    /// Game from `--game`, else `general.default_game`.
    pub fn game<'a>(&'a self, flags: &'a GlobalFlags) -> anyhow::Result<&'a str> {
        self.config
            .resolve_game(flags.game.as_deref())
            .context("no game selected; pass --game or set general.default_game")
    }
}
