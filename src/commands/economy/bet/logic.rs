//! Contains the core logic for the `/bet` command.

use crate::commands::economy::EconomyError;
use crate::database::{AccountField, AccountStore, FieldWrite};
use rand::{Rng, rng};
use serenity::model::id::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetOutcome {
    pub amount: i64,
    pub won: bool,
    /// Wallet balance after settlement.
    pub balance: i64,
}

/// Fair 50/50 flip; `true` means the player wins.
pub fn flip_coin() -> bool {
    rng().random_bool(0.5)
}

/// Validates the wager against the wallet, flips, and settles.
///
/// `flip` is only called once every check has passed.
pub async fn place_bet(
    store: &AccountStore,
    user_id: UserId,
    amount: Option<i64>,
    flip: impl FnOnce() -> bool,
) -> Result<BetOutcome, EconomyError> {
    store.ensure_account(user_id).await?;

    let amount = amount.ok_or(EconomyError::MissingAmount)?;
    let wallet = store.money(user_id).await?;

    if amount <= 0 {
        return Err(EconomyError::NonPositiveAmount);
    }
    if amount > wallet {
        return Err(EconomyError::InsufficientFunds);
    }

    // Refused before flipping so the outcome never decides whether the bet is allowed.
    let Some(win_balance) = wallet.checked_add(amount) else {
        return Err(EconomyError::BalanceOverflow);
    };

    let won = flip();
    let balance = if won { win_balance } else { wallet - amount };
    store
        .set_field(AccountField::Money, FieldWrite::Set(balance), user_id)
        .await?;

    tracing::info!(target = "economy.bet", user_id = user_id.get(), amount, won, balance, "bet settled");
    Ok(BetOutcome {
        amount,
        won,
        balance,
    })
}
