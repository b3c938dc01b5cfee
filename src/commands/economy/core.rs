//! Rules shared by the economy commands: the rejection taxonomy and the
//! daily cooldown arithmetic.

use crate::database::StoreError;
use chrono::Duration;
use std::fmt;

/// Minimum time between two successful `daily` claims.
pub const DAILY_COOLDOWN_SECS: i64 = 86_400;

/// Why an economy command did not go through.
///
/// Every variant except `Store` is a user input rejection and its `Display`
/// text is sent back to the caller verbatim. `Store` is an operator problem.
#[derive(Debug, thiserror::Error)]
pub enum EconomyError {
    #[error("You need to enter the amount to bet.")]
    MissingAmount,
    #[error("You must enter a positive number greater than 0.")]
    NonPositiveAmount,
    #[error("You don't have enough money.")]
    InsufficientFunds,
    #[error("User is not a valid user or not a member of this server.")]
    InvalidRecipient,
    #[error("That would push a wallet past the maximum balance.")]
    BalanceOverflow,
    #[error("You need to wait `{remaining}` before you can use this again.")]
    OnCooldown { remaining: WaitTime },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EconomyError {
    pub fn is_rejection(&self) -> bool {
        !matches!(self, EconomyError::Store(_))
    }
}

/// Remaining cooldown, rendered as `H:MM:SS` (with a leading day count past 24h).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTime(pub Duration);

impl WaitTime {
    pub fn from_secs(secs: i64) -> Self {
        Self(Duration::seconds(secs))
    }
}

impl fmt::Display for WaitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.num_seconds().max(0);
        let days = total / 86_400;
        let hours = (total % 86_400) / 3_600;
        let minutes = (total % 3_600) / 60;
        let seconds = total % 60;
        match days {
            0 => write!(f, "{hours}:{minutes:02}:{seconds:02}"),
            1 => write!(f, "1 day, {hours}:{minutes:02}:{seconds:02}"),
            n => write!(f, "{n} days, {hours}:{minutes:02}:{seconds:02}"),
        }
    }
}

/// Returns the remaining wait when a claim at `now` is still on cooldown.
pub fn daily_cooldown_remaining(last_claim: i64, now: i64) -> Option<WaitTime> {
    let elapsed = now - last_claim;
    (elapsed < DAILY_COOLDOWN_SECS).then(|| WaitTime::from_secs(DAILY_COOLDOWN_SECS - elapsed))
}
