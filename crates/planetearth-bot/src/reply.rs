//! Reply delivery over the two Discord surfaces.
//!
//! A slash command is answered through its interaction: the first reply is
//! the initial response and anything after it is a followup. Join notices
//! have no interaction and go straight to a channel. Pipelines only see the
//! [`Replyable`] capability and hand it to [`dispatch`].

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use planetearth_types::Embed;
use serenity::builder::{
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::http::Http;
use serenity::model::application::CommandInteraction;
use serenity::model::id::ChannelId;
use serenity::model::Colour;
use tracing::{debug, error, warn};

use crate::errors::{classify, ActionError};

/// Text and/or embed to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub content: Option<String>,
    pub embed: Option<Embed>,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
        }
    }

    pub fn embed(embed: Embed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
        }
    }
}

/// Something a reply can be sent through.
pub trait Replyable: Send + Sync {
    fn send(&self, reply: &Reply) -> impl Future<Output = Result<(), ActionError>> + Send;
}

/// Send `reply` through `target`, logging instead of propagating failures.
pub async fn dispatch<R: Replyable>(target: &R, reply: &Reply) {
    match target.send(reply).await {
        Ok(()) => {}
        Err(ActionError::PermissionDenied(msg)) => {
            warn!("Reply not delivered, permission denied: {}", msg);
        }
        Err(ActionError::Other(msg)) => {
            error!("Reply not delivered: {}", msg);
        }
    }
}

fn to_serenity_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new()
        .title(&embed.title)
        .colour(Colour::new(embed.color));
    if let Some(url) = &embed.thumbnail {
        builder = builder.thumbnail(url);
    }
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    builder
}

// ── Channel surface ───────────────────────────────────────────────────────────

/// Plain channel message
pub struct ChannelReply {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelReply {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }
}

impl Replyable for ChannelReply {
    async fn send(&self, reply: &Reply) -> Result<(), ActionError> {
        let mut builder = CreateMessage::new();
        if let Some(content) = &reply.content {
            builder = builder.content(content);
        }
        if let Some(embed) = &reply.embed {
            builder = builder.embed(to_serenity_embed(embed));
        }

        self.channel_id
            .send_message(&*self.http, builder)
            .await
            .map(|_| ())
            .map_err(|e| classify(&e))
    }
}

// ── Interaction surface ───────────────────────────────────────────────────────

/// Which interaction endpoint the next reply must use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Initial,
    Followup,
}

/// Tracks whether an interaction has been acknowledged.
#[derive(Debug, Default)]
pub struct ResponseState {
    responded: AtomicBool,
}

impl ResponseState {
    pub fn next_surface(&self) -> Surface {
        if self.responded.load(Ordering::Acquire) {
            Surface::Followup
        } else {
            Surface::Initial
        }
    }

    pub fn mark_responded(&self) {
        self.responded.store(true, Ordering::Release);
    }
}

/// Reply surface of one slash-command invocation
pub struct InteractionReply {
    http: Arc<Http>,
    interaction: CommandInteraction,
    state: ResponseState,
}

impl InteractionReply {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self {
            http,
            interaction,
            state: ResponseState::default(),
        }
    }
}

impl Replyable for InteractionReply {
    async fn send(&self, reply: &Reply) -> Result<(), ActionError> {
        match self.state.next_surface() {
            Surface::Initial => {
                let mut message = CreateInteractionResponseMessage::new();
                if let Some(content) = &reply.content {
                    message = message.content(content);
                }
                if let Some(embed) = &reply.embed {
                    message = message.embed(to_serenity_embed(embed));
                }

                self.interaction
                    .create_response(&*self.http, CreateInteractionResponse::Message(message))
                    .await
                    .map_err(|e| classify(&e))?;
                self.state.mark_responded();
                debug!("Sent initial response for /{}", self.interaction.data.name);
                Ok(())
            }
            Surface::Followup => {
                let mut followup = CreateInteractionResponseFollowup::new();
                if let Some(content) = &reply.content {
                    followup = followup.content(content);
                }
                if let Some(embed) = &reply.embed {
                    followup = followup.embed(to_serenity_embed(embed));
                }

                self.interaction
                    .create_followup(&*self.http, followup)
                    .await
                    .map(|_| ())
                    .map_err(|e| classify(&e))
            }
        }
    }
}
