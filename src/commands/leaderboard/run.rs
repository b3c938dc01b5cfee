//! Implements the run logic for the `/leaderboard` command.

use super::logic::top_balances;
use super::ui::create_leaderboard_embed;
use crate::AppState;
use crate::commands::args;
use crate::commands::reply::Reply;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("leaderboard")
        .description("Show the members with the most money.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "max_entries",
                "How many members to show (1-50, default 10)",
            )
            .required(false),
        )
}

async fn execute(state: &AppState, requested: Option<i64>) -> Reply {
    let result = {
        let store = state.accounts.lock().await;
        top_balances(&store, requested).await
    };
    match result {
        Ok(standings) => Reply::embed(create_leaderboard_embed(&standings)),
        Err(e) => Reply::from_error(&e, "leaderboard"),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let requested = args::option_i64(interaction, "max_entries");
    execute(state, requested)
        .await
        .send_to_interaction(ctx, interaction)
        .await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: &[&str], state: &AppState) {
    let reply = match args::parse_int(args.first().copied()) {
        Ok(requested) => execute(state, requested).await,
        Err(_) => Reply::invalid_input(),
    };
    reply.send_to_message(ctx, msg).await;
}
