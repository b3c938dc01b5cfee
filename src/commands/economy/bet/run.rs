//! Handles the command logic for `/bet` and `!bet`.

use super::logic::{flip_coin, place_bet};
use crate::AppState;
use crate::commands::args;
use crate::commands::economy::ui::create_bet_reply;
use crate::commands::reply::Reply;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("bet")
        .description("Place a bet (50/50). Enter the amount to bet.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "The amount to bet")
                .required(true),
        )
}

async fn execute(state: &AppState, user_id: UserId, amount: Option<i64>) -> Reply {
    let result = {
        let store = state.accounts.lock().await;
        place_bet(&store, user_id, amount, flip_coin).await
    };
    match result {
        Ok(outcome) => create_bet_reply(&outcome),
        Err(e) => Reply::from_error(&e, "bet"),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let amount = args::option_i64(interaction, "amount");
    execute(state, interaction.user.id, amount)
        .await
        .send_to_interaction(ctx, interaction)
        .await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: &[&str], state: &AppState) {
    let reply = match args::parse_int(args.first().copied()) {
        Ok(amount) => execute(state, msg.author.id, amount).await,
        Err(_) => Reply::invalid_input(),
    };
    reply.send_to_message(ctx, msg).await;
}
