//! Service layer of the bots and the health server.
//!
//! - `command` - registry, gates and dispatcher of the text command pipeline
//! - `bot_status` - shared connection status of the running bots
//! - `health` - health, readiness and status reports built from the bot status

pub mod bot_status;
pub mod command;
pub mod health;
