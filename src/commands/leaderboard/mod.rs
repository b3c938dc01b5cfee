//! Implements the `/leaderboard` command (richest members first).

pub mod logic;
pub mod run;
pub mod ui;

pub use run::register;
