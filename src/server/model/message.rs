//! Inbound chat messages, independent of the platform client.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::server::model::surface::{Channel, GuildSurface};

/// A text message received from the chat platform.
///
/// Built by the bot integration for every `MESSAGE_CREATE` event and handed to the
/// dispatcher. The caller's capabilities are not resolved up front; the dispatcher
/// fetches them from `guild` only when a command requires them.
pub struct InboundMessage {
    pub author_id: u64,
    pub author_tag: String,
    /// The author is a bot account.
    pub author_is_bot: bool,
    pub content: String,
    /// User IDs mentioned in the message, in mention order.
    pub mentions: Vec<u64>,
    pub received_at: DateTime<Utc>,
    /// Gateway heartbeat latency of the receiving bot, if known.
    pub gateway_latency: Option<Duration>,
    pub channel: Arc<dyn Channel>,
    /// Guild of the channel, `None` for a private one-to-one channel.
    pub guild: Option<Arc<dyn GuildSurface>>,
}

impl InboundMessage {
    pub fn is_private(&self) -> bool {
        self.guild.is_none()
    }
}
