//! Contains the core logic for the `/daily` command.

use crate::commands::economy::EconomyError;
use crate::commands::economy::core::daily_cooldown_remaining;
use crate::database::AccountStore;
use serenity::model::id::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyClaim {
    pub amount: i64,
    pub balance: i64,
}

/// Grants `daily_amount` when at least a full day has passed since the last claim.
/// `now` is Unix seconds; the claim timestamp and the credit share one commit.
pub async fn collect_daily(
    store: &AccountStore,
    user_id: UserId,
    now: i64,
    daily_amount: i64,
) -> Result<DailyClaim, EconomyError> {
    store.ensure_account(user_id).await?;

    let last_claim = store.last_daily_timestamp(user_id).await?;
    if let Some(remaining) = daily_cooldown_remaining(last_claim, now) {
        return Err(EconomyError::OnCooldown { remaining });
    }

    if store.money(user_id).await?.checked_add(daily_amount).is_none() {
        return Err(EconomyError::BalanceOverflow);
    }

    let balance = store.claim_daily(user_id, now, daily_amount).await?;
    tracing::info!(target = "economy.daily", user_id = user_id.get(), amount = daily_amount, balance, "daily claimed");
    Ok(DailyClaim {
        amount: daily_amount,
        balance,
    })
}
