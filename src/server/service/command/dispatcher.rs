//! Per-message command dispatch.
//!
//! Every inbound message runs through a fixed pipeline that stops at the first step
//! that does not pass:
//!
//! 1. **Ignore** - bot authors and messages without the prefix
//! 2. **Parse** - strip the prefix, split on whitespace, lowercase the first token
//! 3. **Resolve** - look the key up in the registry; unknown keys are dropped silently
//! 4. **Permission gate** - only for commands that require capabilities
//! 5. **Cooldown gate** - only for commands that declare a cooldown
//! 6. **Execute** - run the command body; failures are contained here
//!
//! The permission gate always runs before the cooldown gate so that a caller without
//! permission never consumes a cooldown slot.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use std::any::Any;
use std::sync::Arc;

use crate::server::{
    error::command::{CommandError, GateRejection},
    model::{
        bot::BotProfile,
        capability::CapabilitySet,
        command::{Caller, Command, CommandDescriptor, InvocationContext},
        embed::Embed,
        message::InboundMessage,
        surface::Response,
    },
    service::command::{
        cooldown::{CooldownCheck, CooldownTracker},
        permission::PermissionGate,
        registry::CommandRegistry,
    },
};

/// Generic notice sent when a command body fails; the error itself is only logged.
pub const EXECUTION_FAILURE_NOTICE: &str = "❌ An error occurred while executing that command!";

/// Why a message was dropped without any response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Authored by a bot account, including this bot.
    BotAuthor,
    /// Does not start with the configured prefix.
    MissingPrefix,
    /// Nothing follows the prefix.
    EmptyCommand,
    /// The key does not resolve to a registered command.
    UnknownCommand(String),
}

/// Terminal state of one dispatched message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Ignored(IgnoreReason),
    /// A gate rejected the invocation and a rejection notice was attempted.
    Rejected(GateRejection),
    /// The command body completed.
    Executed { command: String },
    /// The command body failed and the generic failure notice was attempted.
    Failed { command: String },
}

/// Parses the text after the prefix into a lowercased command key and its arguments.
///
/// # Returns
/// - `Some((key, args))` - First whitespace separated token lowercased, remaining tokens
/// - `None` - No token follows the prefix
pub fn parse_command(body: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = body.split_whitespace();
    let key = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();

    Some((key, args))
}

/// Command dispatcher of one bot instance.
///
/// Owns the bot's cooldown tracker and shares the immutable registry.
pub struct Dispatcher {
    bot: Arc<BotProfile>,
    registry: Arc<CommandRegistry>,
    cooldowns: CooldownTracker,
}

impl Dispatcher {
    pub fn new(
        bot: Arc<BotProfile>,
        registry: Arc<CommandRegistry>,
        cooldowns: CooldownTracker,
    ) -> Self {
        Self {
            bot,
            registry,
            cooldowns,
        }
    }

    pub fn bot(&self) -> &BotProfile {
        &self.bot
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Dispatches a message using the current time for cooldowns.
    pub async fn dispatch(&self, message: InboundMessage) -> DispatchOutcome {
        self.dispatch_at(message, Utc::now()).await
    }

    /// Dispatches a message, evaluating cooldowns at `now`.
    ///
    /// Never fails: gate rejections and execution failures are reported to the caller
    /// in chat (at most one reply attempt each) and returned as the outcome.
    pub async fn dispatch_at(&self, message: InboundMessage, now: DateTime<Utc>) -> DispatchOutcome {
        if message.author_is_bot {
            return DispatchOutcome::Ignored(IgnoreReason::BotAuthor);
        }

        let Some(body) = message.content.strip_prefix(self.bot.prefix.as_str()) else {
            return DispatchOutcome::Ignored(IgnoreReason::MissingPrefix);
        };

        let Some((command_key, raw_args)) = parse_command(body) else {
            return DispatchOutcome::Ignored(IgnoreReason::EmptyCommand);
        };

        let Some(descriptor) = self.registry.lookup(&command_key) else {
            return DispatchOutcome::Ignored(IgnoreReason::UnknownCommand(command_key));
        };

        let mut caller_capabilities = CapabilitySet::new();
        if !descriptor.required_capabilities().is_empty() {
            caller_capabilities = self.resolve_capabilities(&message).await;

            if let Err(rejection) = PermissionGate::check(
                descriptor.required_capabilities(),
                &caller_capabilities,
                message.is_private(),
            ) {
                return self.reject(&message, &descriptor, rejection).await;
            }
        }

        if let Some(cooldown) = descriptor.cooldown() {
            let check = self
                .cooldowns
                .check(message.author_id, descriptor.name(), cooldown, now)
                .await;

            if let CooldownCheck::Active { remaining_seconds } = check {
                let rejection = GateRejection::CooldownActive {
                    command: descriptor.name().to_string(),
                    remaining_seconds,
                };
                return self.reject(&message, &descriptor, rejection).await;
            }
        }

        let command = descriptor.name().to_string();
        let channel = Arc::clone(&message.channel);
        let guild_id = message.guild.as_ref().map(|guild| guild.guild_id());
        let caller = Caller {
            id: message.author_id,
            tag: message.author_tag.clone(),
        };

        tracing::info!(
            "[{}] Executing command {} for {} ({}) in guild {:?}",
            self.bot.name,
            command,
            caller.tag,
            caller.id,
            guild_id
        );

        let ctx = InvocationContext {
            caller: caller.clone(),
            caller_capabilities,
            is_private_channel: message.is_private(),
            raw_args,
            command_key,
            mentions: message.mentions,
            received_at: message.received_at,
            gateway_latency: message.gateway_latency,
            channel: message.channel,
            guild: message.guild,
            registry: Arc::clone(&self.registry),
            bot: Arc::clone(&self.bot),
        };

        match execute(descriptor.handler(), ctx).await {
            Ok(()) => DispatchOutcome::Executed { command },
            Err(e) => {
                tracing::error!(
                    "[{}] Error executing command {} for {} ({}) in guild {:?}: {}",
                    self.bot.name,
                    command,
                    caller.tag,
                    caller.id,
                    guild_id,
                    e
                );

                if let Err(reply_err) = channel.reply(Response::from(EXECUTION_FAILURE_NOTICE)).await
                {
                    tracing::debug!(
                        "[{}] Failed to send failure notice for {}: {}",
                        self.bot.name,
                        command,
                        reply_err
                    );
                }

                DispatchOutcome::Failed { command }
            }
        }
    }

    /// Capabilities of the author in the message's guild.
    ///
    /// A failed or empty lookup yields an empty set, which the permission gate then
    /// rejects for any gated command.
    async fn resolve_capabilities(&self, message: &InboundMessage) -> CapabilitySet {
        let Some(guild) = &message.guild else {
            return CapabilitySet::new();
        };

        match guild.member(message.author_id).await {
            Ok(Some(member)) => member.capabilities,
            Ok(None) => {
                tracing::warn!(
                    "[{}] Author {} not found in guild {}",
                    self.bot.name,
                    message.author_id,
                    guild.guild_id()
                );
                CapabilitySet::new()
            }
            Err(e) => {
                tracing::warn!(
                    "[{}] Failed to resolve permissions of {} in guild {}: {}",
                    self.bot.name,
                    message.author_id,
                    guild.guild_id(),
                    e
                );
                CapabilitySet::new()
            }
        }
    }

    async fn reject(
        &self,
        message: &InboundMessage,
        descriptor: &CommandDescriptor,
        rejection: GateRejection,
    ) -> DispatchOutcome {
        tracing::debug!(
            "[{}] Rejected command {} for {}: {}",
            self.bot.name,
            descriptor.name(),
            message.author_id,
            rejection
        );

        let title = match rejection {
            GateRejection::NoGuildContext => "Server Only",
            GateRejection::MissingCapabilities(_) => "Missing Permissions",
            GateRejection::CooldownActive { .. } => "Slow Down",
        };
        let notice = Embed::error(title, rejection.to_string());

        if let Err(e) = message.channel.reply(Response::Embed(notice)).await {
            tracing::debug!(
                "[{}] Failed to send rejection for {}: {}",
                self.bot.name,
                descriptor.name(),
                e
            );
        }

        DispatchOutcome::Rejected(rejection)
    }
}

/// Runs a command body on its own task so that a panic is contained like an error.
async fn execute(handler: Arc<dyn Command>, ctx: InvocationContext) -> Result<(), CommandError> {
    let task = tokio::spawn(async move { handler.execute(&ctx).await });

    match task.await {
        Ok(result) => result,
        Err(e) if e.is_panic() => Err(CommandError::Panicked(panic_message(e.into_panic()))),
        Err(e) => Err(CommandError::Internal(e.to_string())),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
