//! Implements the `/wallet` command.

pub mod logic;
pub mod run;

pub use run::register;
