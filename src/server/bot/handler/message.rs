use dioxus_logger::tracing;
use serenity::all::{Context, Message};
use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    bot::surface::{SerenityChannel, SerenityGuild},
    model::{
        message::InboundMessage,
        surface::{Channel, GuildSurface},
    },
    service::{
        bot_status::BotStatusRegistry,
        command::dispatcher::{DispatchOutcome, Dispatcher},
    },
};

/// Handle message creation in any channel the bot can read
pub async fn handle_message(
    dispatcher: &Dispatcher,
    statuses: &BotStatusRegistry,
    ctx: Context,
    message: Message,
) {
    // Cheap early exits before any surface is built
    if message.author.bot || !message.content.starts_with(dispatcher.bot().prefix.as_str()) {
        return;
    }

    let channel: Arc<dyn Channel> = Arc::new(SerenityChannel::new(
        ctx.http.clone(),
        message.channel_id,
        message.id,
    ));
    let guild: Option<Arc<dyn GuildSurface>> = message
        .guild_id
        .map(|guild_id| Arc::new(SerenityGuild::new(ctx.clone(), guild_id)) as Arc<dyn GuildSurface>);
    let latency = statuses.latency(&dispatcher.bot().name).await;

    let inbound = inbound_from_message(&message, channel, guild, latency);

    match dispatcher.dispatch(inbound).await {
        DispatchOutcome::Ignored(reason) => {
            tracing::trace!("{} ignored message {}: {:?}", dispatcher.bot().name, message.id, reason);
        }
        DispatchOutcome::Rejected(rejection) => {
            tracing::debug!(
                "{} rejected message {} from {}: {}",
                dispatcher.bot().name,
                message.id,
                message.author.tag(),
                rejection
            );
        }
        DispatchOutcome::Executed { .. } | DispatchOutcome::Failed { .. } => {}
    }
}

/// Converts a serenity message into the platform-neutral inbound message.
pub fn inbound_from_message(
    message: &Message,
    channel: Arc<dyn Channel>,
    guild: Option<Arc<dyn GuildSurface>>,
    gateway_latency: Option<Duration>,
) -> InboundMessage {
    InboundMessage {
        author_id: message.author.id.get(),
        author_tag: message.author.tag(),
        author_is_bot: message.author.bot,
        content: message.content.clone(),
        mentions: message.mentions.iter().map(|user| user.id.get()).collect(),
        received_at: message.timestamp.to_utc(),
        gateway_latency,
        channel,
        guild,
    }
}
