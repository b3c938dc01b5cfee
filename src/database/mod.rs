//! This module acts as a central hub for all database-related logic.
//! The economy only needs one table, so the submodules are small: `init`
//! owns the pool and schema, `models` the row types, and `accounts` the
//! queries, e.g. `database::accounts::AccountStore::top_n`.

pub mod accounts;
pub mod init;
pub mod models;

pub use accounts::{AccountStore, StoreError};
pub use init::DbPool;
pub use models::{Account, AccountField, FieldWrite, LeaderboardEntry};
