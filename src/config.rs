//! Runtime configuration read from the environment (`.env` is loaded first by `main`).

use serenity::model::id::GuildId;
use std::fmt;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://economy.db?mode=rwc";
pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_DAILY_AMOUNT: i64 = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected {0} in the environment or .env file")]
    Missing(&'static str),
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    /// The only guild the bot answers in and registers slash commands for.
    pub server_id: GuildId,
    pub database_url: String,
    pub prefix: String,
    /// Coins granted per successful `daily`.
    pub daily_amount: i64,
    /// Sticker shown as the wallet thumbnail; no thumbnail when unset.
    pub wallet_sticker_id: Option<u64>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("server_id", &self.server_id)
            .field("database_url", &self.database_url)
            .field("prefix", &self.prefix)
            .field("daily_amount", &self.daily_amount)
            .field("wallet_sticker_id", &self.wallet_sticker_id)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let server_id_str = get("SERVER_ID").ok_or(ConfigError::Missing("SERVER_ID"))?;
        let server_id = parse_snowflake("SERVER_ID", &server_id_str)?;

        let daily_amount = match get("DAILY_AMOUNT") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(amount) if amount > 0 => amount,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DAILY_AMOUNT",
                        value: raw,
                        expected: "a positive integer",
                    });
                }
            },
            None => DEFAULT_DAILY_AMOUNT,
        };

        let wallet_sticker_id = get("WALLET_STICKER_ID")
            .map(|raw| parse_snowflake("WALLET_STICKER_ID", &raw))
            .transpose()?;

        Ok(Self {
            discord_token,
            server_id: GuildId::new(server_id),
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            prefix: get("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            daily_amount,
            wallet_sticker_id,
        })
    }
}

fn parse_snowflake(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw.to_string(),
            expected: "a non-zero Discord id",
        }),
    }
}
