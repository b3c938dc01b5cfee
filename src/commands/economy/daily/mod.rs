//! Implements the `/daily` command.

pub mod logic;
pub mod run;

pub use run::register;
