//! Application context shared by every event handler

use planetearth_api::{ApiClient, PlanetEarthApi};

use crate::admission::GuildAdmissionFilter;
use crate::commands::CommandRouter;
use crate::config::DiscordBotConfig;

/// Built once in `main` and handed to the event handler; holds no per-event
/// state.
pub struct App<A = ApiClient> {
    pub api: A,
    pub admission: GuildAdmissionFilter,
    pub router: CommandRouter,
    /// Role granted to verified members
    pub verified_role: String,
    /// Guilds where joins are never verified
    pub excluded_guilds: Vec<u64>,
}

impl<A: PlanetEarthApi> App<A> {
    pub fn new(api: A, config: &DiscordBotConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            api,
            admission: GuildAdmissionFilter::new()?,
            router: CommandRouter::planetearth(),
            verified_role: config.verified_role.clone(),
            excluded_guilds: config.excluded_guilds.clone(),
        })
    }
}
