// src/commands/mod.rs
// Declares the command modules and the helpers they share.

pub mod args;
pub mod economy;
pub mod leaderboard;
pub mod reply;
