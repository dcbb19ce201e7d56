//! `set` - changes a member's nickname.
//!
//! Requires the caller to hold `ManageNicknames` (enforced by the dispatcher's
//! permission gate). The command itself checks everything that depends on the bot
//! and the target: the bot's own permission, the mention, the nickname, the guild
//! owner and the role hierarchy.

use dioxus_logger::tracing;
use serenity::async_trait;

use crate::server::{
    error::command::CommandError,
    model::{
        capability::Capability,
        command::{Command, CommandDefinition, InvocationContext},
        embed::Embed,
        surface::Response,
    },
};

/// Longest nickname the platform accepts, in characters.
pub const MAX_NICKNAME_CHARS: usize = 32;

pub struct SetNickname;

pub fn definition() -> CommandDefinition {
    CommandDefinition::new()
        .name("set")
        .description("Change a user's nickname")
        .aliases(["setnick", "nickname"])
        .requires(Capability::MANAGE_NICKNAMES)
        .handler(SetNickname)
}

fn rejection(description: impl Into<String>) -> Response {
    Response::Embed(Embed::error("Cannot Set Nickname", description))
}

#[async_trait]
impl Command for SetNickname {
    async fn execute(&self, ctx: &InvocationContext) -> Result<(), CommandError> {
        let usage = format!("Usage: `{}set @user <new nickname>`", ctx.bot.prefix);

        let Some(guild) = &ctx.guild else {
            ctx.channel
                .reply(rejection("This command can only be used in a server!"))
                .await?;
            return Ok(());
        };

        let bot_member = guild.bot_member().await?;
        if !bot_member
            .capabilities
            .contains(&Capability::MANAGE_NICKNAMES)
        {
            ctx.channel
                .reply(rejection("I don't have permission to manage nicknames!"))
                .await?;
            return Ok(());
        }

        let Some(&target_id) = ctx.mentions.first() else {
            ctx.channel
                .reply(rejection(format!("You need to mention a user!\n\n{}", usage)))
                .await?;
            return Ok(());
        };

        // The first argument is the mention itself
        let nickname = ctx.raw_args.iter().skip(1).cloned().collect::<Vec<_>>().join(" ");
        if nickname.is_empty() {
            ctx.channel
                .reply(rejection(format!(
                    "You need to provide a new nickname!\n\n{}",
                    usage
                )))
                .await?;
            return Ok(());
        }

        if nickname.chars().count() > MAX_NICKNAME_CHARS {
            ctx.channel
                .reply(rejection(format!(
                    "Nickname must be {} characters or less!",
                    MAX_NICKNAME_CHARS
                )))
                .await?;
            return Ok(());
        }

        if target_id == guild.owner_id().await? {
            ctx.channel
                .reply(rejection("I cannot change the server owner's nickname!"))
                .await?;
            return Ok(());
        }

        let Some(target) = guild.member(target_id).await? else {
            ctx.channel
                .reply(rejection("Could not find that user in this server."))
                .await?;
            return Ok(());
        };

        if bot_member.highest_role_position <= target.highest_role_position {
            ctx.channel
                .reply(rejection(
                    "I cannot change the nickname of someone with a higher or equal role!",
                ))
                .await?;
            return Ok(());
        }

        if let Err(e) = guild.set_nickname(target.user_id, &nickname).await {
            tracing::warn!(
                "Failed to set nickname of {} in guild {} for {}: {}",
                target.user_id,
                guild.guild_id(),
                ctx.caller.tag,
                e
            );
            ctx.channel
                .reply(rejection(
                    "Failed to change nickname. Please make sure I have the proper permissions and the user's role is lower than mine!",
                ))
                .await?;
            return Ok(());
        }

        tracing::info!(
            "{} changed nickname of {} in guild {}",
            ctx.caller.tag,
            target.user_id,
            guild.guild_id()
        );

        ctx.channel
            .reply(Response::Embed(Embed::success(
                "Nickname Changed",
                format!(
                    "Successfully changed **{}**'s nickname to **{}**",
                    target.tag, nickname
                ),
            )))
            .await?;

        Ok(())
    }
}
