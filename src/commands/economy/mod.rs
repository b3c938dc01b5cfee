//! This module contains all commands related to the server economy.

pub mod bet;
pub mod core;
pub mod daily;
pub mod give;
pub mod ui;
pub mod wallet;

pub use self::core::{DAILY_COOLDOWN_SECS, EconomyError, WaitTime};
pub use bet::run::{run_prefix as bet_prefix, run_slash as bet_slash};
pub use daily::run::{run_prefix as daily_prefix, run_slash as daily_slash};
pub use give::run::{run_prefix as give_prefix, run_slash as give_slash};
pub use wallet::run::{run_prefix as wallet_prefix, run_slash as wallet_slash};
