#[cfg(test)]
mod tests {
    use crate::config::{Config, ReadEnv, DEFAULT_EXCLUDED_GUILDS, DEFAULT_VERIFIED_ROLE};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct InMemoryEnv(HashMap<&'static str, &'static str>);

    impl InMemoryEnv {
        fn new(pairs: &[(&'static str, &'static str)]) -> Self {
            Self(pairs.iter().cloned().collect())
        }
    }

    impl ReadEnv for InMemoryEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| v.to_string())
        }
    }

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    // ── from_file ─────────────────────────────────────────────────────────────

    #[test]
    fn test_from_file_minimal() {
        let toml = r#"
[discord]
bot_token = "BOT-TOKEN-123"
"#;
        let f = write_toml(toml);
        let cfg = Config::from_file(f.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.discord.bot_token, "BOT-TOKEN-123");
        assert_eq!(cfg.discord.verified_role, DEFAULT_VERIFIED_ROLE);
        assert_eq!(cfg.discord.excluded_guilds, DEFAULT_EXCLUDED_GUILDS);
        assert_eq!(cfg.api.base_url, "https://planetearth.kr/api");
        assert!(cfg.api.api_key.is_none());
    }

    #[test]
    fn test_from_file_full() {
        let toml = r#"
[discord]
bot_token = "SECRET"
verified_role = "Verified"
excluded_guilds = [111, 222]

[api]
base_url = "http://localhost:9000/api"
api_key = "KEY"
timeout_secs = 15
"#;
        let f = write_toml(toml);
        let cfg = Config::from_file(f.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.discord.verified_role, "Verified");
        assert_eq!(cfg.discord.excluded_guilds, vec![111, 222]);
        assert_eq!(cfg.api.base_url, "http://localhost:9000/api");
        assert_eq!(cfg.api.api_key.as_deref(), Some("KEY"));
        assert_eq!(cfg.api.timeout_secs, Some(15));
    }

    #[test]
    fn test_from_file_empty_excluded_list() {
        let toml = r#"
[discord]
bot_token = "TOK"
excluded_guilds = []
"#;
        let f = write_toml(toml);
        let cfg = Config::from_file(f.path().to_str().unwrap()).unwrap();
        assert!(cfg.discord.excluded_guilds.is_empty());
    }

    #[test]
    fn test_from_file_missing_returns_error() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file_invalid_toml_returns_error() {
        let f = write_toml("this is not valid toml !!!");
        let result = Config::from_file(f.path().to_str().unwrap());
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Failed to parse config file"));
    }

    // ── from_env_with ─────────────────────────────────────────────────────────

    #[test]
    fn test_from_env_requires_bot_token() {
        let env = InMemoryEnv::new(&[]);
        let result = Config::from_env_with(&env);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("DISCORD_BOT_TOKEN not set"));
    }

    #[test]
    fn test_from_env_defaults() {
        let env = InMemoryEnv::new(&[("DISCORD_BOT_TOKEN", "TOK")]);
        let cfg = Config::from_env_with(&env).unwrap();
        assert_eq!(cfg.discord.bot_token, "TOK");
        assert_eq!(cfg.discord.verified_role, DEFAULT_VERIFIED_ROLE);
        assert_eq!(cfg.discord.excluded_guilds, vec![971724292482019359]);
        assert_eq!(cfg.api.base_url, "https://planetearth.kr/api");
        assert!(cfg.api.api_key.is_none());
        assert!(cfg.api.timeout_secs.is_none());
    }

    #[test]
    fn test_from_env_all_vars() {
        let env = InMemoryEnv::new(&[
            ("DISCORD_BOT_TOKEN", "TOK"),
            ("PLANETEARTH_VERIFIED_ROLE", "Citizen"),
            ("PLANETEARTH_EXCLUDED_GUILDS", "1, 2,,abc,3"),
            ("PLANETEARTH_API_BASE", "http://127.0.0.1:8080"),
            ("PLANETEARTH_API_KEY", "abc123"),
            ("PLANETEARTH_API_TIMEOUT_SECS", "20"),
        ]);
        let cfg = Config::from_env_with(&env).unwrap();
        assert_eq!(cfg.discord.verified_role, "Citizen");
        assert_eq!(cfg.discord.excluded_guilds, vec![1, 2, 3]);
        assert_eq!(cfg.api.base_url, "http://127.0.0.1:8080");
        assert_eq!(cfg.api.api_key.as_deref(), Some("abc123"));
        assert_eq!(cfg.api.timeout_secs, Some(20));
    }

    #[test]
    fn test_from_env_blank_values_fall_back() {
        let env = InMemoryEnv::new(&[
            ("DISCORD_BOT_TOKEN", "TOK"),
            ("PLANETEARTH_VERIFIED_ROLE", "  "),
            ("PLANETEARTH_API_KEY", ""),
            ("PLANETEARTH_API_TIMEOUT_SECS", "soon"),
        ]);
        let cfg = Config::from_env_with(&env).unwrap();
        assert_eq!(cfg.discord.verified_role, DEFAULT_VERIFIED_ROLE);
        assert!(cfg.api.api_key.is_none());
        assert!(cfg.api.timeout_secs.is_none());
    }

    #[test]
    fn test_from_env_empty_excluded_list_disables_exclusion() {
        let env = InMemoryEnv::new(&[
            ("DISCORD_BOT_TOKEN", "TOK"),
            ("PLANETEARTH_EXCLUDED_GUILDS", ""),
        ]);
        let cfg = Config::from_env_with(&env).unwrap();
        assert!(cfg.discord.excluded_guilds.is_empty());
    }
}
