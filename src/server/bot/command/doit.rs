//! `doit` - the classic "Do it for Burl Fret" message.

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

pub const BURL_FRET_URL: &str =
    "https://cdn.discordapp.com/attachments/764971562205184002/767324313987579914/video0.mov";

const DOIT_COLOR: u32 = 0x57F287;

pub struct DoIt;

pub fn definition() -> CommandDefinition {
    CommandDefinition::new()
        .name("doit")
        .description("Do it for Burl Fret!")
        .aliases(["doitforburl", "burl"])
        .cooldown_secs(5)
        .handler(DoIt)
}

#[async_trait]
impl Command for DoIt {
    /// Posts the embed to the channel and reacts to the invoking message.
    ///
    /// If the embed cannot be posted, a plain text message with the link is sent
    /// instead and no reaction is added. A failed fallback or reaction is ignored.
    async fn execute(&self, ctx: &InvocationContext) -> Result<(), CommandError> {
        let embed = Embed::new()
            .color(DOIT_COLOR)
            .title("🎸 Do it for Burl Fret! 🎸")
            .description("*Do it for her...*")
            .image(BURL_FRET_URL)
            .footer("Remember why you started")
            .with_timestamp();

        if let Err(e) = ctx.channel.send(Response::Embed(embed)).await {
            tracing::warn!(
                "Failed to send doit embed for {}, falling back to text: {}",
                ctx.caller.tag,
                e
            );
            if let Err(e) = ctx
                .channel
                .send(Response::Text(format!("Do it for Burl Fret! {}", BURL_FRET_URL)))
                .await
            {
                tracing::debug!("Failed to send doit fallback: {}", e);
            }
            return Ok(());
        }

        if let Err(e) = ctx.channel.react("🎸").await {
            tracing::debug!("Failed to react to doit invocation: {}", e);
        }

        Ok(())
    }
}
