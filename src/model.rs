//! This module defines the shared state handed to every command.
//! The event handler owns an `Arc<AppState>` and passes it down explicitly.

use crate::config::Config;
use crate::database::AccountStore;
use tokio::sync::Mutex;

/// The central, shared state of the application.
pub struct AppState {
    /// The account store. Commands hold the lock for their whole
    /// read-modify-write sequence so concurrent invocations cannot lose updates.
    pub accounts: Mutex<AccountStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: AccountStore, config: Config) -> Self {
        Self {
            accounts: Mutex::new(store),
            config,
        }
    }
}
