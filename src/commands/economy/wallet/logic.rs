//! Contains the core logic for the `/wallet` command.

use crate::commands::economy::EconomyError;
use crate::database::AccountStore;
use serenity::model::id::UserId;

/// Current balance of `target`, creating the account on first sight.
pub async fn wallet_balance(store: &AccountStore, target: UserId) -> Result<i64, EconomyError> {
    store.ensure_account(target).await?;
    Ok(store.money(target).await?)
}
