use std::sync::Arc;

use gamble_bot::AppState;
use gamble_bot::config::Config;
use gamble_bot::database::AccountStore;
use gamble_bot::handler::Handler;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the variables may come from the real environment.
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store = match AccountStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, url = %config.database_url, "could not open the database");
            std::process::exit(1);
        }
    };

    let token = config.discord_token.clone();
    let state = Arc::new(AppState::new(store, config));

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = match Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = ?e, "error creating the Discord client");
            std::process::exit(1);
        }
    };

    if let Err(why) = client.start().await {
        tracing::error!(error = ?why, "client error");
    }
}
