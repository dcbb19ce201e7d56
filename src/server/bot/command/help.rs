//! `help` - lists commands or describes one command.

use serenity::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::server::{
    error::command::CommandError,
    model::{
        bot::BotProfile,
        command::{Command, CommandDefinition, CommandDescriptor, InvocationContext},
        embed::Embed,
        surface::Response,
    },
    service::command::registry::CommandRegistry,
};

pub struct Help;

pub fn definition() -> CommandDefinition {
    CommandDefinition::new()
        .name("help")
        .description("Display a list of all available commands or info about a specific command")
        .aliases(["commands", "h"])
        .cooldown_secs(5)
        .handler(Help)
}

#[async_trait]
impl Command for Help {
    async fn execute(&self, ctx: &InvocationContext) -> Result<(), CommandError> {
        let response = match ctx.raw_args.first() {
            Some(requested) => {
                let key = requested.to_lowercase();
                match ctx.registry.lookup(&key) {
                    Some(command) => Response::Embed(command_embed(&command, &ctx.bot)),
                    None => Response::Text(format!("❌ Command `{}` not found!", key)),
                }
            }
            None => Response::Embed(overview_embed(&ctx.registry, &ctx.bot)),
        };

        ctx.channel.reply(response).await?;

        Ok(())
    }
}

/// Detailed view of a single command.
pub fn command_embed(command: &CommandDescriptor, bot: &BotProfile) -> Embed {
    let mut embed = Embed::new()
        .color(bot.color)
        .title(format!("📖 Command: {}", command.name()))
        .description(command.description())
        .with_timestamp();

    if !command.aliases().is_empty() {
        let aliases: Vec<String> = command.aliases().iter().map(|a| format!("`{}`", a)).collect();
        embed = embed.field("Aliases", aliases.join(", "), false);
    }

    if !command.required_capabilities().is_empty() {
        embed = embed.field(
            "Required Permissions",
            command.required_capabilities().to_string(),
            false,
        );
    }

    if let Some(cooldown) = command.cooldown() {
        let seconds = if cooldown.subsec_millis() == 0 {
            cooldown.as_secs().to_string()
        } else {
            format!("{:.1}", cooldown.as_secs_f64())
        };
        embed = embed.field("Cooldown", format!("{} seconds", seconds), true);
    }

    if let Some(category) = command.category() {
        embed = embed.field("Category", category, true);
    }

    embed
}

/// Overview of every unique command, one field per category.
pub fn overview_embed(registry: &CommandRegistry, bot: &BotProfile) -> Embed {
    let mut categories: BTreeMap<&str, Vec<&Arc<CommandDescriptor>>> = BTreeMap::new();
    for command in registry.commands() {
        categories
            .entry(command.category().unwrap_or("Uncategorized"))
            .or_default()
            .push(command);
    }

    let mut embed = Embed::new()
        .color(bot.color)
        .title("📖 Command List")
        .description(format!(
            "Use `{}help <command>` for more info about a specific command.\n\u{200b}",
            bot.prefix
        ))
        .with_timestamp();

    for (category, mut commands) in categories {
        commands.sort_by(|a, b| a.name().cmp(b.name()));

        let lines: Vec<String> = commands
            .iter()
            .map(|command| {
                let aliases = if command.aliases().is_empty() {
                    String::new()
                } else {
                    format!(" ({})", command.aliases().join(", "))
                };
                format!("`{}`{} - {}", command.name(), aliases, command.description())
            })
            .collect();

        embed = embed.field(category, lines.join("\n"), false);
    }

    let stats = registry.stats();
    embed.footer(format!(
        "Total: {} command{}, {} alias{}",
        stats.total,
        if stats.total == 1 { "" } else { "s" },
        stats.aliases,
        if stats.aliases == 1 { "" } else { "es" }
    ))
}
