//! Implements the `/bet` coin-flip command.

pub mod logic;
pub mod run;

pub use run::register;
