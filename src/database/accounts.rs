//! Contains all database functions for the `users` table: lazy account
//! creation, typed field access, the grouped writes used by `daily` and
//! `give`, and the wealth ranking.

use super::init::{self, DbPool};
use super::models::{Account, AccountField, FieldWrite, LeaderboardEntry};
use serenity::model::id::UserId;
use sqlx::{Sqlite, Transaction};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// The `users` table holds more than one row for an id. Never repaired here.
    #[error("found {count} rows for user id {user_id}, expected at most one")]
    DuplicateAccount { user_id: i64, count: i64 },
    #[error("no account row for user id {0}")]
    MissingAccount(i64),
    /// An `Add` write would leave the 64-bit integer range (SQLite would store a REAL).
    #[error("adding {delta} to {column} of user id {user_id} overflows")]
    Overflow {
        user_id: i64,
        column: &'static str,
        delta: i64,
    },
}

fn db_id(user_id: UserId) -> i64 {
    user_id.get() as i64
}

/// Data-access handle for player accounts.
///
/// The store performs no locking of its own; callers serialize every
/// read-modify-write sequence (see `AppState::accounts`).
#[derive(Clone, Debug)]
pub struct AccountStore {
    pool: DbPool,
}

impl AccountStore {
    /// Opens (or creates) the database and applies the schema.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        Ok(Self::from_pool(init::connect(database_url).await?))
    }

    /// Wraps an existing pool. The schema must already be applied.
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Idempotent get-or-create: inserts the zero-valued row for `user_id`
    /// and commits it when no row exists yet.
    pub async fn ensure_account(&self, user_id: UserId) -> Result<(), StoreError> {
        let id = db_id(user_id);
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        match count {
            0 => {
                sqlx::query("INSERT INTO users (id, money, last_daily_timestamp) VALUES (?, 0, 0)")
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                tracing::debug!(target = "db.accounts", user_id = id, "created account");
                Ok(())
            }
            1 => Ok(()),
            count => {
                tracing::error!(target = "db.accounts", user_id = id, count, "duplicate account rows");
                Err(StoreError::DuplicateAccount { user_id: id, count })
            }
        }
    }

    pub async fn account(&self, user_id: UserId) -> Result<Account, StoreError> {
        let id = db_id(user_id);
        sqlx::query_as::<_, Account>(
            "SELECT id, money, last_daily_timestamp FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::MissingAccount(id))
    }

    /// Reads one field. The account must already exist.
    pub async fn get_field(&self, field: AccountField, user_id: UserId) -> Result<i64, StoreError> {
        let id = db_id(user_id);
        let sql = format!("SELECT {} FROM users WHERE id = ?", field.column());
        sqlx::query_scalar::<_, i64>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::MissingAccount(id))
    }

    pub async fn money(&self, user_id: UserId) -> Result<i64, StoreError> {
        self.get_field(AccountField::Money, user_id).await
    }

    pub async fn last_daily_timestamp(&self, user_id: UserId) -> Result<i64, StoreError> {
        self.get_field(AccountField::LastDailyTimestamp, user_id).await
    }

    /// Writes one field and commits immediately.
    pub async fn set_field(
        &self,
        field: AccountField,
        write: FieldWrite,
        user_id: UserId,
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        set_field_in(&mut tx, field, write, user_id).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Stamps the claim time and credits `amount` in a single commit.
    /// Returns the new balance.
    pub async fn claim_daily(
        &self,
        user_id: UserId,
        now: i64,
        amount: i64,
    ) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;
        set_field_in(&mut tx, AccountField::LastDailyTimestamp, FieldWrite::Set(now), user_id)
            .await?;
        set_field_in(&mut tx, AccountField::Money, FieldWrite::Add(amount), user_id).await?;
        let balance: i64 = sqlx::query_scalar("SELECT money FROM users WHERE id = ?")
            .bind(db_id(user_id))
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(balance)
    }

    /// Moves `amount` from `from` to `to` in a single commit. Both accounts must exist.
    pub async fn transfer(&self, from: UserId, to: UserId, amount: i64) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        set_field_in(&mut tx, AccountField::Money, FieldWrite::Add(-amount), from).await?;
        set_field_in(&mut tx, AccountField::Money, FieldWrite::Add(amount), to).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Fetches the `limit` richest accounts, highest balance first.
    pub async fn top_n(&self, limit: i64) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT id AS user_id, money
            FROM users
            ORDER BY money DESC
            LIMIT ?;
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }
}

/// Writes one field through an open transaction. Nothing is durable until
/// the caller commits.
pub async fn set_field_in(
    tx: &mut Transaction<'_, Sqlite>,
    field: AccountField,
    write: FieldWrite,
    user_id: UserId,
) -> Result<(), StoreError> {
    let id = db_id(user_id);
    let column = field.column();
    let result = match write {
        FieldWrite::Set(value) => {
            let sql = format!("UPDATE users SET {column} = ? WHERE id = ?");
            let done = sqlx::query(&sql).bind(value).bind(id).execute(&mut **tx).await?;
            done
        }
        // SQLite turns an overflowing integer sum into a REAL; refuse the write instead.
        FieldWrite::Add(delta) => {
            let sql = format!(
                "UPDATE users SET {column} = {column} + ? WHERE id = ? AND typeof({column} + ?) = 'integer'"
            );
            let done = sqlx::query(&sql)
                .bind(delta)
                .bind(id)
                .bind(delta)
                .execute(&mut **tx)
                .await?;
            done
        }
    };
    if result.rows_affected() == 1 {
        return Ok(());
    }

    let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;
    match write {
        FieldWrite::Add(delta) if exists > 0 => {
            tracing::warn!(target = "db.accounts", user_id = id, column, delta, "refused overflowing write");
            Err(StoreError::Overflow {
                user_id: id,
                column,
                delta,
            })
        }
        _ => Err(StoreError::MissingAccount(id)),
    }
}
