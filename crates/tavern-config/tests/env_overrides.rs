use figment::Jail;
use tavern_config::TavernConfig;

#[test]
fn env_vars_map_to_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("TAVERN_API__BASE_URL", "https://env.example/api");
        jail.set_env("TAVERN_API__TOKEN", "env-token");
        jail.set_env("TAVERN_CACHE__MAX_ENTRIES", "8");
        jail.set_env("TAVERN_GENERAL__DEFAULT_GAME", "g-env");

        let config = TavernConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://env.example/api");
        assert_eq!(config.api.token, "env-token");
        assert_eq!(config.cache.max_entries, 8);
        assert_eq!(config.general.default_game(), Some("g-env"));
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tavern")?;
        jail.create_file(
            ".tavern/config.toml",
            "[api]\ntoken = \"from-file\"\ntimeout_secs = 30\n",
        )?;
        jail.set_env("TAVERN_API__TOKEN", "from-env");

        let config = TavernConfig::load().expect("config loads");
        assert_eq!(config.api.token, "from-env");
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}
