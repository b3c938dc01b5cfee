//! Handles the command logic for `/daily` and `!daily`.

use super::logic::collect_daily;
use crate::AppState;
use crate::commands::economy::ui::create_daily_reply;
use crate::commands::reply::Reply;
use chrono::Utc;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::mention::Mentionable;
use serenity::model::user::User;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("daily").description("Get a small amount of money, works once per day.")
}

async fn execute(state: &AppState, user: &User) -> Reply {
    let now = Utc::now().timestamp();
    let result = {
        let store = state.accounts.lock().await;
        collect_daily(&store, user.id, now, state.config.daily_amount).await
    };
    match result {
        Ok(claim) => create_daily_reply(user.mention(), &claim),
        Err(e) => Reply::from_error(&e, "daily"),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    execute(state, &interaction.user)
        .await
        .send_to_interaction(ctx, interaction)
        .await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, state: &AppState) {
    execute(state, &msg.author).await.send_to_message(ctx, msg).await;
}
