//! Contains the data structures that map to the `users` table or its query results.

use sqlx::FromRow;

/// One row of the `users` table.
#[derive(FromRow, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub money: i64,
    pub last_daily_timestamp: i64,
}

/// The mutable columns of an account. Column names only ever come from here,
/// never from caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Money,
    LastDailyTimestamp,
}

impl AccountField {
    pub const fn column(self) -> &'static str {
        match self {
            AccountField::Money => "money",
            AccountField::LastDailyTimestamp => "last_daily_timestamp",
        }
    }
}

/// How a value is written into an [`AccountField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWrite {
    /// `field = value`
    Set(i64),
    /// `field = field + delta`, evaluated by the database.
    Add(i64),
}

/// Represents a single entry in the wealth leaderboard.
#[derive(FromRow, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub money: i64,
}
