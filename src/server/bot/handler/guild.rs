use dioxus_logger::tracing;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::server::service::bot_status::BotStatusRegistry;

/// Handle a guild becoming available or being joined
pub async fn handle_guild_create(
    name: &str,
    statuses: &BotStatusRegistry,
    ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    if is_new.unwrap_or(false) {
        tracing::info!("{} joined guild {} ({})", name, guild.name, guild.id);
    } else {
        tracing::debug!("{} guild available: {} ({})", name, guild.name, guild.id);
    }

    statuses.set_guilds(name, ctx.cache.guild_count()).await;
}

/// Handle leaving a guild or a guild outage
pub async fn handle_guild_delete(
    name: &str,
    statuses: &BotStatusRegistry,
    ctx: Context,
    incomplete: UnavailableGuild,
) {
    if incomplete.unavailable {
        tracing::warn!("{} guild {} became unavailable", name, incomplete.id);
    } else {
        tracing::info!("{} left guild {}", name, incomplete.id);
    }

    statuses.set_guilds(name, ctx.cache.guild_count()).await;
}
