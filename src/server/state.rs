//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned for each request handler
//! through Axum's state extraction. All fields are cheap to clone.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::server::service::bot_status::BotStatusRegistry;

#[derive(Clone)]
pub struct AppState {
    /// Connection status of the running bots, written by their event handlers.
    pub statuses: BotStatusRegistry,

    /// Process start time, used for uptime reporting.
    pub started_at: DateTime<Utc>,

    /// Names of the configured bots in configuration order.
    pub bot_names: Arc<Vec<String>>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `statuses` - Status registry shared with the bot handlers
    /// - `started_at` - Process start time
    /// - `bot_names` - Names of the configured bots
    pub fn new(statuses: BotStatusRegistry, started_at: DateTime<Utc>, bot_names: Vec<String>) -> Self {
        Self {
            statuses,
            started_at,
            bot_names: Arc::new(bot_names),
        }
    }
}
