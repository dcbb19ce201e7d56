//! Ready event handler for bot initialization.
//!
//! The `ready` event fires after the gateway handshake of every (re)connection, so
//! the bot status is refreshed here rather than only once at startup.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::server::service::bot_status::BotStatusRegistry;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `name` - Display name of the bot the event belongs to
/// - `statuses` - Status registry updated with the ready state and guild count
/// - `ready` - Ready event data containing bot user and guild information
pub async fn handle_ready(name: &str, statuses: &BotStatusRegistry, _ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord as {} ({} guilds)",
        name,
        ready.user.tag(),
        ready.guilds.len()
    );

    statuses.mark_ready(name, ready.guilds.len()).await;
}
