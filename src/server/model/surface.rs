//! Outbound surfaces of the chat platform.
//!
//! The dispatcher and the commands only see these traits. The bot integration
//! implements them on top of serenity; tests implement them with recording doubles.

use chrono::{DateTime, Utc};
use serenity::async_trait;

use crate::server::{
    error::platform::PlatformError,
    model::{capability::CapabilitySet, embed::Embed},
};

/// Content of an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Text(String),
    Embed(Embed),
}

impl From<&str> for Response {
    fn from(text: &str) -> Self {
        Response::Text(text.to_string())
    }
}

impl From<String> for Response {
    fn from(text: String) -> Self {
        Response::Text(text)
    }
}

impl From<Embed> for Response {
    fn from(embed: Embed) -> Self {
        Response::Embed(embed)
    }
}

/// Handle to a message the bot has sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub id: u64,
    pub created_at: DateTime<Utc>,
}

/// Guild member as seen by the commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub user_id: u64,
    /// Display tag of the underlying user.
    pub tag: String,
    /// Position of the member's highest role, 0 when the member has no roles.
    pub highest_role_position: u16,
    /// Guild-level capabilities of the member.
    pub capabilities: CapabilitySet,
}

/// The channel an inbound message arrived in.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Replies to the inbound message.
    async fn reply(&self, response: Response) -> Result<SentMessage, PlatformError>;

    /// Sends a new message to the channel without referencing the inbound message.
    async fn send(&self, response: Response) -> Result<SentMessage, PlatformError>;

    /// Replaces the content of a message previously sent by the bot.
    async fn edit(&self, message: &SentMessage, response: Response) -> Result<(), PlatformError>;

    /// Adds a unicode reaction to the inbound message.
    async fn react(&self, emoji: &str) -> Result<(), PlatformError>;
}

/// The guild an inbound message arrived in.
#[async_trait]
pub trait GuildSurface: Send + Sync {
    fn guild_id(&self) -> u64;

    async fn owner_id(&self) -> Result<u64, PlatformError>;

    /// Looks up a member of this guild, `None` if the user is not a member.
    async fn member(&self, user_id: u64) -> Result<Option<MemberInfo>, PlatformError>;

    /// The bot's own membership in this guild.
    async fn bot_member(&self) -> Result<MemberInfo, PlatformError>;

    async fn set_nickname(&self, user_id: u64, nickname: &str) -> Result<(), PlatformError>;
}
