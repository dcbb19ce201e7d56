//! Discord bot integration.
//!
//! Each configured bot runs its own serenity client with its own event handler and
//! dispatcher. The handler translates gateway events into bot status updates and
//! inbound messages; `surface` implements the outbound channel and guild traits on
//! top of serenity's HTTP client and cache.
//!
//! The clients are started in separate tokio tasks so that a failing bot does not
//! take down the health server or the other bot.
//!
//! # Gateway Intents
//!
//! The bots require the following gateway intents:
//! - `GUILDS` - Receive events about guild creation, updates, and deletion
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `DIRECT_MESSAGES` - Receive messages sent in private channels
//! - `MESSAGE_CONTENT` - Read the content of messages (privileged intent)
//! - `GUILD_MEMBERS` - Resolve members for permission checks (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for each bot application.

pub mod command;
pub mod handler;
pub mod permission;
pub mod start;
pub mod surface;
