use dioxus_logger::tracing;
use serenity::all::{
    ConnectionStage, Context, EventHandler, Guild, Message, Ready, ShardStageUpdateEvent,
    UnavailableGuild,
};
use serenity::async_trait;
use std::sync::Arc;

use crate::server::service::{bot_status::BotStatusRegistry, command::dispatcher::Dispatcher};

pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler, one per bot client
pub struct Handler {
    pub name: String,
    pub dispatcher: Arc<Dispatcher>,
    pub statuses: BotStatusRegistry,
}

impl Handler {
    pub fn new(name: String, dispatcher: Arc<Dispatcher>, statuses: BotStatusRegistry) -> Self {
        Self {
            name,
            dispatcher,
            statuses,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.name, &self.statuses, ctx, ready).await;
    }

    /// Called when the gateway connection of a shard changes stage
    async fn shard_stage_update(&self, _ctx: Context, event: ShardStageUpdateEvent) {
        let online = event.new == ConnectionStage::Connected;

        if online != (event.old == ConnectionStage::Connected) {
            tracing::info!(
                "{} shard {} is now {}",
                self.name,
                event.shard_id,
                if online { "online" } else { "offline" }
            );
        }

        self.statuses.set_online(&self.name, online).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.name, &self.statuses, ctx, guild, is_new).await;
    }

    /// Called when the bot leaves a guild or a guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, _full: Option<Guild>) {
        guild::handle_guild_delete(&self.name, &self.statuses, ctx, incomplete).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.dispatcher, &self.statuses, ctx, message).await;
    }
}
