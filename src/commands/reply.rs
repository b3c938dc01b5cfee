//! The messaging sink: one `Reply` value that either entry point (prefix
//! message or slash command) can deliver.

use crate::commands::economy::EconomyError;
use serenity::builder::{
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::Context;

const INVALID_INPUT: &str = "Invalid input.";
const STORE_FAILURE: &str = "Something went wrong while updating your wallet. Please try again later.";

#[derive(Debug, Clone, Default)]
pub struct Reply {
    content: Option<String>,
    embed: Option<CreateEmbed>,
    ephemeral: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn embed(embed: CreateEmbed) -> Self {
        Self {
            embed: Some(embed),
            ..Self::default()
        }
    }

    /// Only the caller sees it (slash commands only; prefix replies are always public).
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    /// Reply for missing or unparsable arguments.
    pub fn invalid_input() -> Self {
        Self::text(INVALID_INPUT).ephemeral()
    }

    /// Rejections are shown as-is; store failures are logged and replaced by a generic message.
    pub fn from_error(err: &EconomyError, command: &str) -> Self {
        if err.is_rejection() {
            tracing::debug!(target = "economy.reject", command = %command, reason = %err);
            Self::text(err.to_string()).ephemeral()
        } else {
            tracing::error!(target = "economy", command = %command, error = %err, "command failed");
            Self::text(STORE_FAILURE).ephemeral()
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn has_embed(&self) -> bool {
        self.embed.is_some()
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    pub async fn send_to_message(self, ctx: &Context, msg: &Message) {
        let mut builder = CreateMessage::new().reference_message(msg);
        if let Some(content) = self.content {
            builder = builder.content(content);
        }
        if let Some(embed) = self.embed {
            builder = builder.embed(embed);
        }
        if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
            tracing::warn!(target = "reply", channel_id = %msg.channel_id, error = ?e, "send_message failed");
        }
    }

    pub async fn send_to_interaction(self, ctx: &Context, interaction: &CommandInteraction) {
        let mut message = CreateInteractionResponseMessage::new().ephemeral(self.ephemeral);
        if let Some(content) = self.content {
            message = message.content(content);
        }
        if let Some(embed) = self.embed {
            message = message.embed(embed);
        }
        if let Err(e) = interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
        {
            tracing::warn!(target = "reply", command = %interaction.data.name, error = ?e, "create_response failed");
        }
    }
}
