// Library entry so integration tests and the binary share the same modules.
pub mod commands;
pub mod config;
pub mod database;
pub mod handler;
pub mod model;

pub use model::AppState;
