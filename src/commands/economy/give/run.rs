//! Handles the command logic for `/give` and `!give`.

use super::logic::give_money;
use crate::AppState;
use crate::commands::args::{self, MemberFilter};
use crate::commands::economy::ui::create_give_reply;
use crate::commands::reply::Reply;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::guild::Member;
use serenity::model::id::UserId;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("give")
        .description("Transfer money to another member.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The member to pay")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "How much to send")
                .required(true),
        )
}

async fn execute(
    state: &AppState,
    giver: UserId,
    giver_name: &str,
    receiver: Option<Member>,
    amount: i64,
) -> Reply {
    let result = {
        let store = state.accounts.lock().await;
        give_money(&store, giver, receiver.as_ref().map(|m| m.user.id), amount).await
    };
    match (result, receiver) {
        (Ok(amount), Some(member)) => create_give_reply(amount, giver_name, member.display_name()),
        (Ok(_), None) => Reply::invalid_input(),
        (Err(e), _) => Reply::from_error(&e, "give"),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let (Some(user_id), Some(amount)) = (
        args::option_user(interaction, "user"),
        args::option_i64(interaction, "amount"),
    ) else {
        Reply::invalid_input()
            .send_to_interaction(ctx, interaction)
            .await;
        return;
    };

    let receiver =
        args::resolve_member(ctx, state.config.server_id, user_id, MemberFilter::HumansOnly).await;
    let giver_name = interaction
        .member
        .as_ref()
        .map(|m| m.display_name().to_string())
        .unwrap_or_else(|| interaction.user.display_name().to_string());

    execute(state, interaction.user.id, &giver_name, receiver, amount)
        .await
        .send_to_interaction(ctx, interaction)
        .await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: &[&str], state: &AppState) {
    let user_id = msg
        .mentions
        .first()
        .map(|u| u.id)
        .or_else(|| args.first().and_then(|a| args::parse_user(a)));
    let amount = args::parse_int(args.get(1).copied());

    let (Some(user_id), Ok(Some(amount))) = (user_id, amount) else {
        Reply::invalid_input().send_to_message(ctx, msg).await;
        return;
    };

    let receiver =
        args::resolve_member(ctx, state.config.server_id, user_id, MemberFilter::HumansOnly).await;
    let giver_name = msg
        .member
        .as_ref()
        .and_then(|m| m.nick.clone())
        .unwrap_or_else(|| msg.author.display_name().to_string());

    execute(state, msg.author.id, &giver_name, receiver, amount)
        .await
        .send_to_message(ctx, msg)
        .await;
}
