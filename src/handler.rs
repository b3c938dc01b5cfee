use crate::{AppState, commands};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Bet,
    Wallet,
    Daily,
    Give,
    Leaderboard,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bet" => Ok(Command::Bet),
            "wallet" | "bal" => Ok(Command::Wallet),
            "daily" => Ok(Command::Daily),
            "give" => Ok(Command::Give),
            "leaderboard" | "lb" => Ok(Command::Leaderboard),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
    pub state: Arc<AppState>,
}

impl Handler {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            allowed_guild_id: state.config.server_id,
            state,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = &interaction else {
            return;
        };
        if command.guild_id != Some(self.allowed_guild_id) {
            return;
        }
        let state = self.state.as_ref();
        match command.data.name.as_str() {
            "bet" => commands::economy::bet_slash(&ctx, command, state).await,
            "wallet" => commands::economy::wallet_slash(&ctx, command, state).await,
            "daily" => commands::economy::daily_slash(&ctx, command, state).await,
            "give" => commands::economy::give_slash(&ctx, command, state).await,
            "leaderboard" => commands::leaderboard::run::run_slash(&ctx, command, state).await,
            other => {
                tracing::debug!(target = "handler", command = %other, "unhandled slash command");
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || msg.author.bot {
            return;
        }
        let Some(command_body) = msg.content.strip_prefix(self.state.config.prefix.as_str()) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        let state = self.state.as_ref();
        match command {
            Command::Bet => commands::economy::bet_prefix(&ctx, &msg, &args_vec, state).await,
            Command::Wallet => commands::economy::wallet_prefix(&ctx, &msg, &args_vec, state).await,
            Command::Daily => commands::economy::daily_prefix(&ctx, &msg, state).await,
            Command::Give => commands::economy::give_prefix(&ctx, &msg, &args_vec, state).await,
            Command::Leaderboard => {
                commands::leaderboard::run::run_prefix(&ctx, &msg, &args_vec, state).await
            }
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target = "handler", user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![
            commands::economy::bet::register(),
            commands::economy::wallet::register(),
            commands::economy::daily::register(),
            commands::economy::give::register(),
            commands::leaderboard::register(),
        ];
        match self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            Ok(registered) => {
                tracing::info!(target = "handler", count = registered.len(), "registered guild commands")
            }
            Err(e) => tracing::error!(target = "handler", error = ?e, "error creating guild commands"),
        }
    }
}
