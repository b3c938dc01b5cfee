//! Contains the core logic for the `/give` command.

use crate::commands::economy::EconomyError;
use crate::database::AccountStore;
use serenity::model::id::UserId;

/// Moves `amount` coins from `giver` to `receiver`.
///
/// `receiver` is `None` when the dispatcher could not resolve the target to a
/// member of the server; that is checked after the amount, so an empty wallet
/// is reported before a bad recipient.
pub async fn give_money(
    store: &AccountStore,
    giver: UserId,
    receiver: Option<UserId>,
    amount: i64,
) -> Result<i64, EconomyError> {
    store.ensure_account(giver).await?;

    if amount <= 0 {
        return Err(EconomyError::NonPositiveAmount);
    }
    if amount > store.money(giver).await? {
        return Err(EconomyError::InsufficientFunds);
    }

    let receiver = receiver.ok_or(EconomyError::InvalidRecipient)?;
    store.ensure_account(receiver).await?;
    if receiver != giver && store.money(receiver).await?.checked_add(amount).is_none() {
        return Err(EconomyError::BalanceOverflow);
    }

    store.transfer(giver, receiver, amount).await?;
    tracing::info!(
        target = "economy.give",
        giver = giver.get(),
        receiver = receiver.get(),
        amount,
        "coins transferred"
    );
    Ok(amount)
}
