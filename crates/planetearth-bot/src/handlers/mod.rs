//! Serenity event handler implementation

use std::sync::Arc;

use serenity::all::ActivityData;
use serenity::async_trait;
use serenity::model::application::{Command, Interaction};
use serenity::model::gateway::Ready;
use serenity::model::guild::{Guild, Member};
use serenity::prelude::*;
use tracing::{debug, info, warn};

use crate::app::App;
use crate::commands::{self, Invocation};
use crate::errors::log_error;
use crate::guild::{resolve_guild, GuildInfo, SerenityGuild};
use crate::reply::{ChannelReply, InteractionReply};
use crate::verification::Verification;

/// Activity shown under the bot's name.
const PRESENCE: &str = "planetearth.kr";

pub struct Handler {
    pub app: Arc<App>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            "Discord bot connected as {} in {} guilds",
            ready.user.name,
            ready.guilds.len()
        );

        ctx.set_activity(Some(ActivityData::playing(PRESENCE)));

        match Command::set_global_commands(&ctx.http, self.app.router.create_commands()).await {
            Ok(registered) => info!("Registered {} global commands", registered.len()),
            Err(e) => log_error("Failed to register global commands", &e),
        }
    }

    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        let info = GuildInfo::from(&guild);

        if self.app.admission.is_eligible(&info.name, info.member_count) {
            info!("Serving guild {} ({})", info.name, info.id);
            return;
        }

        info!(
            "Leaving ineligible guild {} ({}, {} members)",
            info.name, info.id, info.member_count
        );
        if let Err(e) = guild.id.leave(&ctx.http).await {
            log_error(&format!("Failed to leave guild {}", info.id), &e);
        }
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let member_id = new_member.user.id.get();
        let Some(guild) = resolve_guild(&ctx, new_member.guild_id).await else {
            warn!(
                "Guild {} unavailable, skipping verification of {}",
                new_member.guild_id, member_id
            );
            return;
        };

        let actions = SerenityGuild::new(ctx.http.clone(), guild.id);
        let notices = guild
            .system_channel_id
            .map(|channel_id| ChannelReply::new(ctx.http.clone(), channel_id));

        let verification = Verification {
            api: &self.app.api,
            guild: &actions,
            notices: notices.as_ref(),
            admission: &self.app.admission,
            verified_role: &self.app.verified_role,
            excluded_guilds: &self.app.excluded_guilds,
        };

        let state = verification.run(&guild, member_id).await;
        debug!("Verification of {} in guild {}: {:?}", member_id, guild.id, state);
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(cmd) = interaction else {
            return;
        };

        let guild = match cmd.guild_id {
            Some(guild_id) => resolve_guild(&ctx, guild_id).await,
            None => None,
        };
        let invocation = Invocation::from(&cmd);
        debug!(
            "/{} from {} in {:?}",
            invocation.command,
            cmd.user.id,
            guild.as_ref().map(|g| g.id)
        );

        let target = InteractionReply::new(ctx.http.clone(), cmd);
        commands::execute(&self.app, guild.as_ref(), &invocation, &target).await;
    }
}
