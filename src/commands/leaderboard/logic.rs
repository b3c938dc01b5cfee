//! Contains the core logic for the `/leaderboard` command.

use crate::commands::economy::EconomyError;
use crate::database::{AccountStore, LeaderboardEntry};

pub const DEFAULT_ENTRIES: i64 = 10;
pub const MAX_ENTRIES: i64 = 50;

/// A ranked slice of the wealth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    /// The clamped number of entries that was asked for.
    pub requested: i64,
    pub entries: Vec<LeaderboardEntry>,
}

/// Clamps the requested size into `1..=MAX_ENTRIES`, defaulting to `DEFAULT_ENTRIES`.
pub fn clamp_entries(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_ENTRIES).clamp(1, MAX_ENTRIES)
}

pub async fn top_balances(
    store: &AccountStore,
    requested: Option<i64>,
) -> Result<Standings, EconomyError> {
    let requested = clamp_entries(requested);
    let entries = store.top_n(requested).await?;
    Ok(Standings { requested, entries })
}
