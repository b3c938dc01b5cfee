//! Implements the `/give` command for moving coins between members.

pub mod logic;
pub mod run;

pub use run::register;
