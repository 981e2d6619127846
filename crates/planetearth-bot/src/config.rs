//! Configuration management for planetearth-bot

#[path = "config_tests.rs"]
mod config_tests;

use anyhow::{Context, Result};
use planetearth_api::ApiConfig;
use serde::{Deserialize, Serialize};
use std::fs;

/// Role granted after successful verification.
pub const DEFAULT_VERIFIED_ROLE: &str = "인증됨";

/// The PlanetEarth main server verifies members itself.
pub const DEFAULT_EXCLUDED_GUILDS: &[u64] = &[971724292482019359];

/// Environment variable access, swappable in tests
pub trait ReadEnv {
    fn var(&self, key: &str) -> Option<String>;
}

/// Process environment
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Complete bot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord: DiscordBotConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Discord bot specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordBotConfig {
    /// Bot token from the Discord developer portal
    #[serde(default = "default_bot_token")]
    pub bot_token: String,
    /// Name of the role granted to verified members
    #[serde(default = "default_verified_role")]
    pub verified_role: String,
    /// Guild IDs where member joins are not verified
    #[serde(default = "default_excluded_guilds")]
    pub excluded_guilds: Vec<u64>,
}

impl Default for DiscordBotConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            verified_role: default_verified_role(),
            excluded_guilds: default_excluded_guilds(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(&SystemEnv)
    }

    /// Load configuration from the given environment
    pub fn from_env_with<E: ReadEnv>(env: &E) -> Result<Self> {
        let bot_token = env
            .var("DISCORD_BOT_TOKEN")
            .context("DISCORD_BOT_TOKEN not set")?;

        let verified_role = env
            .var("PLANETEARTH_VERIFIED_ROLE")
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(default_verified_role);

        let excluded_guilds = env
            .var("PLANETEARTH_EXCLUDED_GUILDS")
            .map(|s| parse_id_list(&s))
            .unwrap_or_else(default_excluded_guilds);

        let mut api = ApiConfig::new(
            env.var("PLANETEARTH_API_BASE")
                .unwrap_or_else(|| planetearth_api::config::DEFAULT_BASE_URL.to_string()),
        );
        if let Some(key) = env.var("PLANETEARTH_API_KEY").filter(|k| !k.is_empty()) {
            api = api.with_api_key(key);
        }
        if let Some(secs) = env
            .var("PLANETEARTH_API_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            api = api.with_timeout_secs(secs);
        }

        Ok(Config {
            discord: DiscordBotConfig {
                bot_token,
                verified_role,
                excluded_guilds,
            },
            api,
        })
    }
}

fn default_bot_token() -> String {
    std::env::var("DISCORD_BOT_TOKEN").unwrap_or_default()
}

fn default_verified_role() -> String {
    DEFAULT_VERIFIED_ROLE.to_string()
}

fn default_excluded_guilds() -> Vec<u64> {
    DEFAULT_EXCLUDED_GUILDS.to_vec()
}

fn parse_id_list(s: &str) -> Vec<u64> {
    s.split(',')
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .filter_map(|x| x.parse::<u64>().ok())
        .collect()
}
