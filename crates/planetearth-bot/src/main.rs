//! PlanetEarth Discord bot
//!
//! Verifies joining members against their linked PlanetEarth account and
//! answers resident, town and nation lookups through slash commands.

mod admission;
mod app;
mod commands;
mod config;
mod errors;
mod guild;
mod handlers;
mod lookup;
mod messages;
mod render;
mod reply;
#[cfg(test)]
mod testing;
mod verification;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use planetearth_api::ApiClient;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::Config;
use crate::handlers::Handler;

/// PlanetEarth Discord bot CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/planetearth-bot.toml")]
    config: String,

    /// Discord bot token (overrides config file)
    #[arg(long, env = "DISCORD_BOT_TOKEN")]
    bot_token: Option<String>,

    /// PlanetEarth API key (overrides config file)
    #[arg(long, env = "PLANETEARTH_API_KEY")]
    api_key: Option<String>,

    /// PlanetEarth API base URL (overrides config file)
    #[arg(long, env = "PLANETEARTH_API_BASE")]
    api_base: Option<String>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(bot_token) = self.bot_token {
            config.discord.bot_token = bot_token;
        }
        if let Some(api_key) = self.api_key.filter(|k| !k.is_empty()) {
            config.api.api_key = Some(api_key);
        }
        if let Some(api_base) = self.api_base {
            config.api.base_url = api_base;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planetearth_bot=debug,planetearth_api=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PlanetEarth bot");

    let args = Args::parse();

    let mut config = if std::path::Path::new(&args.config).exists() {
        info!("Loading config from file: {}", args.config);
        Config::from_file(&args.config)?
    } else {
        info!("Config file not found, loading from environment");
        Config::from_env()?
    };
    args.apply(&mut config);

    if config.discord.bot_token.is_empty() {
        anyhow::bail!("Discord bot token is empty");
    }
    if config.api.api_key.is_none() {
        info!("No PlanetEarth API key configured, requests are sent without one");
    }
    info!("PlanetEarth API: {}", config.api.base_url);

    let api = ApiClient::new(config.api.clone()).context("Failed to build API client")?;
    let app = Arc::new(App::new(api, &config.discord).context("Failed to build app")?);

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;
    let mut client = Client::builder(&config.discord.bot_token, intents)
        .event_handler(Handler { app })
        .await
        .context("Failed to create Discord client")?;

    // Graceful shutdown: close all shards on SIGTERM or Ctrl+C.
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = tokio::signal::ctrl_c() => {}
                        _ = sigterm.recv() => {}
                    }
                }
                Err(_) => {
                    tokio::signal::ctrl_c().await.ok();
                }
            }
        }
        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await.ok();
        }
        info!("Shutdown signal received, stopping Discord client...");
        shard_manager.shutdown_all().await;
    });

    info!("Starting Discord gateway connection...");

    client.start().await.context("Discord client error")?;

    info!("PlanetEarth bot stopped");
    Ok(())
}
