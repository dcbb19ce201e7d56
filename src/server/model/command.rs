//! Command descriptors and the per-invocation context.
//!
//! A `CommandDefinition` is what a command module provides: every property is optional
//! so that the loader can reject incomplete modules instead of failing to compile the
//! whole command list. A definition is turned into an immutable `CommandDescriptor`
//! once, when the registry is built.

use chrono::{DateTime, Utc};
use serenity::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    error::command::{CommandError, RegistryError},
    model::{
        bot::BotProfile,
        capability::{Capability, CapabilitySet},
        surface::{Channel, GuildSurface},
    },
    service::command::registry::CommandRegistry,
};

/// Executable body of a command.
#[async_trait]
pub trait Command: Send + Sync {
    async fn execute(&self, ctx: &InvocationContext) -> Result<(), CommandError>;
}

/// Immutable record describing one command's identity, guards and behavior.
pub struct CommandDescriptor {
    name: String,
    description: String,
    category: Option<String>,
    aliases: Vec<String>,
    required_capabilities: CapabilitySet,
    cooldown: Option<Duration>,
    handler: Arc<dyn Command>,
}

impl CommandDescriptor {
    /// Lowercase canonical lookup key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Capabilities the caller must hold; empty means unrestricted.
    pub fn required_capabilities(&self) -> &CapabilitySet {
        &self.required_capabilities
    }

    pub fn cooldown(&self) -> Option<Duration> {
        self.cooldown
    }

    pub fn handler(&self) -> Arc<dyn Command> {
        Arc::clone(&self.handler)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("aliases", &self.aliases)
            .field("required_capabilities", &self.required_capabilities)
            .field("cooldown", &self.cooldown)
            .finish_non_exhaustive()
    }
}

/// Partially specified command as provided by a command module.
#[derive(Default)]
pub struct CommandDefinition {
    name: Option<String>,
    description: Option<String>,
    aliases: Vec<String>,
    required_capabilities: CapabilitySet,
    cooldown: Option<Duration>,
    handler: Option<Arc<dyn Command>>,
}

impl CommandDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn requires(mut self, capability: Capability) -> Self {
        self.required_capabilities.insert(capability);
        self
    }

    pub fn cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    pub fn cooldown_secs(self, seconds: u64) -> Self {
        self.cooldown(Duration::from_secs(seconds))
    }

    pub fn handler(mut self, handler: impl Command + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Validates the definition and produces the immutable descriptor.
    ///
    /// Name and aliases are lowercased so they match the lowercased command key the
    /// dispatcher parses.
    ///
    /// # Arguments
    /// - `module` - Source label used in error messages, e.g. `utility/ping`
    /// - `category` - Display category assigned by the loader
    ///
    /// # Returns
    /// - `Ok(CommandDescriptor)` - Complete descriptor
    /// - `Err(RegistryError::MissingField)` - `name`, `description` or `execute` missing
    /// - `Err(RegistryError::EmptyAlias)` - An alias is empty after trimming
    pub fn build(
        self,
        module: &str,
        category: Option<String>,
    ) -> Result<CommandDescriptor, RegistryError> {
        let missing = |field| RegistryError::MissingField {
            module: module.to_string(),
            field,
        };

        let name = self
            .name
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| missing("name"))?;
        let description = self
            .description
            .filter(|description| !description.trim().is_empty())
            .ok_or_else(|| missing("description"))?;
        let handler = self.handler.ok_or_else(|| missing("execute"))?;

        let mut aliases = Vec::with_capacity(self.aliases.len());
        for alias in self.aliases {
            let alias = alias.trim().to_lowercase();
            if alias.is_empty() {
                return Err(RegistryError::EmptyAlias { command: name });
            }
            aliases.push(alias);
        }

        Ok(CommandDescriptor {
            name,
            description,
            category,
            aliases,
            required_capabilities: self.required_capabilities,
            cooldown: self.cooldown,
            handler,
        })
    }
}

/// Identity of the user who invoked a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: u64,
    pub tag: String,
}

/// Ephemeral context of one command invocation.
///
/// Constructed by the dispatcher after the gates pass and dropped once the command
/// finishes, successfully or not.
pub struct InvocationContext {
    pub caller: Caller,
    /// Capabilities resolved for gating; empty when the command required none.
    pub caller_capabilities: CapabilitySet,
    pub is_private_channel: bool,
    /// Whitespace separated tokens after the command key.
    pub raw_args: Vec<String>,
    /// The lowercased key the command was invoked with (name or alias).
    pub command_key: String,
    pub mentions: Vec<u64>,
    pub received_at: DateTime<Utc>,
    pub gateway_latency: Option<Duration>,
    pub channel: Arc<dyn Channel>,
    pub guild: Option<Arc<dyn GuildSurface>>,
    pub registry: Arc<CommandRegistry>,
    pub bot: Arc<BotProfile>,
}
