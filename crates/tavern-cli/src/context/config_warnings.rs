use tavern_config::TavernConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TavernConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TavernConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.has_token() && has_single_underscore_key(&env_keys, "TAVERN_API") {
        warnings.push(
            "api.token is empty while TAVERN_API* env vars exist. Use double underscores (example: TAVERN_API__TOKEN)."
                .to_string(),
        );
    }

    if config.general.default_game().is_none()
        && has_single_underscore_key(&env_keys, "TAVERN_GENERAL")
    {
        warnings.push(
            "general.default_game is empty while TAVERN_GENERAL* env vars exist. Use double underscores (example: TAVERN_GENERAL__DEFAULT_GAME)."
                .to_string(),
        );
    }

    if config.compendium.spells_override().is_none()
        && config.compendium.monsters_override().is_none()
        && has_single_underscore_key(&env_keys, "TAVERN_COMPENDIUM")
    {
        warnings.push(
            "compendium paths are empty while TAVERN_COMPENDIUM* env vars exist. Use double underscores (example: TAVERN_COMPENDIUM__SPELLS_PATH)."
                .to_string(),
        );
    }

    warnings
}

/// `TAVERN_API_TOKEN` rather than `TAVERN_API__TOKEN`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
