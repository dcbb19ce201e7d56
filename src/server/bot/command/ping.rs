//! `ping` - reports round-trip and gateway latency.

use dioxus_logger::tracing;
use serenity::async_trait;

use crate::server::{
    error::command::CommandError,
    model::{
        command::{Command, CommandDefinition, InvocationContext},
        embed::Embed,
        surface::Response,
    },
};

pub const LATENCY_FAILURE_NOTICE: &str = "❌ Failed to calculate latency!";

pub struct Ping;

pub fn definition() -> CommandDefinition {
    CommandDefinition::new()
        .name("ping")
        .description("Check the bot's latency and API response time")
        .aliases(["latency", "pong"])
        .cooldown_secs(3)
        .handler(Ping)
}

/// Rates a latency in milliseconds.
pub fn latency_quality(millis: i64) -> &'static str {
    match millis {
        m if m < 100 => "🟢 Excellent",
        m if m < 200 => "🟡 Good",
        m if m < 400 => "🟠 Fair",
        _ => "🔴 Poor",
    }
}

#[async_trait]
impl Command for Ping {
    /// Replies with a placeholder, then edits it into the latency report.
    ///
    /// Round-trip latency is the time between the inbound message and the placeholder
    /// reply as stamped by the platform. If either step fails the command answers with
    /// its own failure notice instead of the generic one.
    async fn execute(&self, ctx: &InvocationContext) -> Result<(), CommandError> {
        if let Err(e) = report_latency(ctx).await {
            tracing::warn!("Failed to calculate latency for {}: {}", ctx.caller.tag, e);
            if let Err(e) = ctx.channel.reply(Response::from(LATENCY_FAILURE_NOTICE)).await {
                tracing::debug!("Failed to send latency failure notice: {}", e);
            }
        }

        Ok(())
    }
}

async fn report_latency(ctx: &InvocationContext) -> Result<(), CommandError> {
    let sent = ctx.channel.reply(Response::from("🏓 Pinging...")).await?;

    let round_trip = (sent.created_at - ctx.received_at).num_milliseconds().max(0);
    let gateway = match ctx.gateway_latency {
        Some(latency) => {
            let millis = latency.as_millis() as i64;
            format!("{}ms\n{}", millis, latency_quality(millis))
        }
        None => "Not measured yet".to_string(),
    };

    let embed = Embed::new()
        .color(ctx.bot.color)
        .title("🏓 Pong!")
        .field(
            "Round Trip Latency",
            format!("{}ms\n{}", round_trip, latency_quality(round_trip)),
            true,
        )
        .field("WebSocket Latency", gateway, true)
        .footer("Lower is better")
        .with_timestamp();

    ctx.channel.edit(&sent, Response::Embed(embed)).await?;

    Ok(())
}
