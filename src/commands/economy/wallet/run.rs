//! Handles the command logic for `/wallet` and `!wallet`.

use super::logic::wallet_balance;
use crate::AppState;
use crate::commands::args::{self, MemberFilter};
use crate::commands::economy::ui::create_wallet_reply;
use crate::commands::reply::Reply;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::guild::Member;
use serenity::model::id::UserId;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("wallet")
        .description("Check your wallet, or another member's.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The member to look at")
                .required(false),
        )
}

async fn execute(state: &AppState, target: UserId, display_name: &str) -> Reply {
    let result = {
        let store = state.accounts.lock().await;
        wallet_balance(&store, target).await
    };
    match result {
        Ok(money) => create_wallet_reply(display_name, money, state.config.wallet_sticker_id),
        Err(e) => Reply::from_error(&e, "wallet"),
    }
}

/// Any member can be looked at, bots included.
async fn lookup(ctx: &Context, state: &AppState, user_id: UserId) -> Option<Member> {
    args::resolve_member(ctx, state.config.server_id, user_id, MemberFilter::AnyMember).await
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let reply = match args::option_user(interaction, "user") {
        Some(user_id) => match lookup(ctx, state, user_id).await {
            Some(member) => execute(state, member.user.id, member.display_name()).await,
            None => Reply::invalid_input(),
        },
        None => {
            let name = interaction
                .member
                .as_ref()
                .map(|m| m.display_name().to_string())
                .unwrap_or_else(|| interaction.user.display_name().to_string());
            execute(state, interaction.user.id, &name).await
        }
    };
    reply.send_to_interaction(ctx, interaction).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: &[&str], state: &AppState) {
    let target = msg
        .mentions
        .first()
        .map(|u| u.id)
        .or_else(|| args.first().and_then(|a| args::parse_user(a)));

    let reply = match (target, args.first()) {
        (Some(user_id), _) => match lookup(ctx, state, user_id).await {
            Some(member) => execute(state, member.user.id, member.display_name()).await,
            None => Reply::invalid_input(),
        },
        (None, Some(_)) => Reply::invalid_input(),
        (None, None) => {
            let name = msg
                .member
                .as_ref()
                .and_then(|m| m.nick.clone())
                .unwrap_or_else(|| msg.author.display_name().to_string());
            execute(state, msg.author.id, &name).await
        }
    };
    reply.send_to_message(ctx, msg).await;
}
