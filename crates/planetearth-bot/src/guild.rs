//! Guild-side effects of verification and the guild snapshot handlers work on

use std::future::Future;
use std::sync::Arc;

use serenity::builder::EditMember;
use serenity::client::Context;
use serenity::http::Http;
use serenity::model::guild::Guild;
use serenity::model::id::{GuildId, RoleId, UserId};

use crate::errors::{classify, log_error, ActionError};

/// Audit-log reason attached to role grants.
const ROLE_GRANT_REASON: &str = "PlanetEarth verification";

/// What the handlers need to know about a guild, detached from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildInfo {
    pub id: u64,
    pub name: String,
    pub member_count: u64,
    /// Where join notices go
    pub system_channel_id: Option<u64>,
}

impl From<&Guild> for GuildInfo {
    fn from(guild: &Guild) -> Self {
        Self {
            id: guild.id.get(),
            name: guild.name.clone(),
            member_count: guild.member_count,
            system_channel_id: guild.system_channel_id.map(|c| c.get()),
        }
    }
}

/// Resolve a guild from the cache, falling back to the REST API.
pub async fn resolve_guild(ctx: &Context, guild_id: GuildId) -> Option<GuildInfo> {
    let cached = ctx.cache.guild(guild_id).map(|g| GuildInfo::from(&*g));
    if cached.is_some() {
        return cached;
    }

    match ctx.http.get_guild_with_counts(guild_id).await {
        Ok(partial) => Some(GuildInfo {
            id: partial.id.get(),
            name: partial.name,
            member_count: partial.approximate_member_count.unwrap_or(0),
            system_channel_id: partial.system_channel_id.map(|c| c.get()),
        }),
        Err(e) => {
            log_error(&format!("Failed to fetch guild {}", guild_id), &e);
            None
        }
    }
}

/// Member and role edits inside one guild.
pub trait MemberActions: Send + Sync {
    fn set_nickname(
        &self,
        member_id: u64,
        nickname: &str,
    ) -> impl Future<Output = Result<(), ActionError>> + Send;

    /// IDs of every role whose name is exactly `name`.
    fn roles_named(&self, name: &str) -> impl Future<Output = Result<Vec<u64>, ActionError>> + Send;

    fn add_role(
        &self,
        member_id: u64,
        role_id: u64,
    ) -> impl Future<Output = Result<(), ActionError>> + Send;
}

/// [`MemberActions`] over serenity's HTTP client
pub struct SerenityGuild {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityGuild {
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }
}

impl MemberActions for SerenityGuild {
    async fn set_nickname(&self, member_id: u64, nickname: &str) -> Result<(), ActionError> {
        self.guild_id
            .edit_member(
                &*self.http,
                UserId::new(member_id),
                EditMember::new().nickname(nickname),
            )
            .await
            .map(|_| ())
            .map_err(|e| classify(&e))
    }

    async fn roles_named(&self, name: &str) -> Result<Vec<u64>, ActionError> {
        let roles = self
            .guild_id
            .roles(&*self.http)
            .await
            .map_err(|e| classify(&e))?;

        Ok(roles
            .values()
            .filter(|role| role.name == name)
            .map(|role| role.id.get())
            .collect())
    }

    async fn add_role(&self, member_id: u64, role_id: u64) -> Result<(), ActionError> {
        self.http
            .add_member_role(
                self.guild_id,
                UserId::new(member_id),
                RoleId::new(role_id),
                Some(ROLE_GRANT_REASON),
            )
            .await
            .map_err(|e| classify(&e))
    }
}
