//! Domain models describing a bot instance.

use std::time::Duration;

/// Identity and presentation settings of one bot instance.
///
/// Shared with every command invocation of that bot; contains no secrets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotProfile {
    /// Display name, e.g. `Bumbles`.
    pub name: String,
    /// Command prefix messages must start with.
    pub prefix: String,
    /// Theme color used for informational embeds.
    pub color: u32,
}

/// Point-in-time connection status of a bot, as reported by the health server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotStatus {
    /// The gateway `READY` event has been received.
    pub ready: bool,
    /// The gateway connection is currently established.
    pub online: bool,
    /// Number of guilds the bot is a member of.
    pub guilds: usize,
    /// Most recent gateway heartbeat latency, if one has been measured.
    pub latency: Option<Duration>,
}
