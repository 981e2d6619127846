//! Slash command table and dispatch
//!
//! Commands are registered imperatively on a [`CommandRouter`] at startup.
//! The same table drives Discord registration and invocation routing.

#[path = "commands_tests.rs"]
mod commands_tests;

use planetearth_api::PlanetEarthApi;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use tracing::{debug, warn};

use crate::app::App;
use crate::guild::GuildInfo;
use crate::lookup::{lookup, LookupKind};
use crate::messages;
use crate::reply::{dispatch, Replyable, Reply};

/// Name of the single free-text option every lookup command takes.
pub const NAME_OPTION: &str = "name";

/// What runs when a command is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandHandler {
    Help,
    Lookup(LookupKind),
}

/// A required string option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub option: Option<OptionSpec>,
    pub handler: CommandHandler,
}

impl CommandSpec {
    fn to_create_command(&self) -> CreateCommand {
        let mut command = CreateCommand::new(self.name).description(self.description);
        if let Some(option) = &self.option {
            command = command.add_option(
                CreateCommandOption::new(CommandOptionType::String, option.name, option.description)
                    .required(true),
            );
        }
        command
    }
}

/// Command name → spec
#[derive(Debug, Clone, Default)]
pub struct CommandRouter {
    commands: Vec<CommandSpec>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bot's command set: `/help`, `/resident`, `/town`, `/nation`.
    pub fn planetearth() -> Self {
        let mut router = Self::new();
        router.register(CommandSpec {
            name: "help",
            description: "봇 소개를 확인합니다.",
            option: None,
            handler: CommandHandler::Help,
        });
        router.register(CommandSpec {
            name: "resident",
            description: "플레이어 정보를 확인합니다.",
            option: Some(OptionSpec {
                name: NAME_OPTION,
                description: "플레이어 이름을 입력해주세요",
            }),
            handler: CommandHandler::Lookup(LookupKind::Resident),
        });
        router.register(CommandSpec {
            name: "town",
            description: "마을 정보를 확인합니다.",
            option: Some(OptionSpec {
                name: NAME_OPTION,
                description: "마을 이름을 입력해주세요",
            }),
            handler: CommandHandler::Lookup(LookupKind::Town),
        });
        router.register(CommandSpec {
            name: "nation",
            description: "국가 정보를 확인합니다.",
            option: Some(OptionSpec {
                name: NAME_OPTION,
                description: "국가 이름을 입력해주세요",
            }),
            handler: CommandHandler::Lookup(LookupKind::Nation),
        });
        router
    }

    /// Add a command, replacing any existing one with the same name.
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.retain(|c| c.name != spec.name);
        self.commands.push(spec);
    }

    pub fn route(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn specs(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Builders for global registration.
    pub fn create_commands(&self) -> Vec<CreateCommand> {
        self.commands.iter().map(CommandSpec::to_create_command).collect()
    }
}

/// One invocation, detached from serenity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub argument: Option<String>,
}

impl From<&CommandInteraction> for Invocation {
    fn from(cmd: &CommandInteraction) -> Self {
        Self {
            command: cmd.data.name.clone(),
            argument: cmd
                .data
                .options
                .iter()
                .find(|o| o.name == NAME_OPTION)
                .and_then(|o| o.value.as_str())
                .map(str::to_string),
        }
    }
}

/// Gate on guild eligibility, then run the routed handler and reply once.
///
/// Every invocation gets exactly one reply; a command missing from the
/// router (a stale registration) gets [`messages::UNKNOWN_COMMAND`].
///
/// `guild` is `None` outside a guild (DMs), which is never eligible.
pub async fn execute<A, R>(
    app: &App<A>,
    guild: Option<&GuildInfo>,
    invocation: &Invocation,
    target: &R,
) where
    A: PlanetEarthApi,
    R: Replyable,
{
    let Some(spec) = app.router.route(&invocation.command) else {
        warn!("Unknown command /{}", invocation.command);
        dispatch(target, &Reply::text(messages::UNKNOWN_COMMAND)).await;
        return;
    };

    let eligible = guild.is_some_and(|g| app.admission.is_eligible(&g.name, g.member_count));
    if !eligible {
        debug!(
            "Refusing /{} outside an eligible guild ({:?})",
            spec.name,
            guild.map(|g| g.id)
        );
        dispatch(target, &Reply::text(messages::GUILD_NOT_ELIGIBLE)).await;
        return;
    }

    let reply = match spec.handler {
        CommandHandler::Help => Reply::text(messages::HELP),
        CommandHandler::Lookup(kind) => match invocation.argument.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => lookup(&app.api, kind, name).await,
            _ => Reply::text(messages::MISSING_ARGUMENT),
        },
    };

    dispatch(target, &reply).await;
}
