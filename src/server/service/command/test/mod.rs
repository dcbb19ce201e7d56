use chrono::TimeDelta;
use serenity::async_trait;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    error::command::{CommandError, GateRejection, RegistryError},
    model::{
        capability::{Capability, CapabilitySet},
        command::{Command, CommandDefinition, InvocationContext},
        surface::Response,
    },
    service::command::{
        cooldown::CooldownTracker,
        dispatcher::{DispatchOutcome, Dispatcher, IgnoreReason, EXECUTION_FAILURE_NOTICE},
        loader::{load_commands, CommandModule},
        permission::PermissionGate,
        registry::CommandRegistry,
    },
    test_support::{self, FakeGuild, RecordingChannel},
};

mod permission;

/// Command body that replies with a fixed text.
struct Echo(&'static str);

#[async_trait]
impl Command for Echo {
    async fn execute(&self, ctx: &InvocationContext) -> Result<(), CommandError> {
        ctx.channel.reply(Response::from(self.0)).await?;
        Ok(())
    }
}

/// Command body that always fails.
struct Failing;

#[async_trait]
impl Command for Failing {
    async fn execute(&self, _ctx: &InvocationContext) -> Result<(), CommandError> {
        Err(CommandError::Internal("boom".to_string()))
    }
}

/// Command body that panics.
struct Panicking;

#[async_trait]
impl Command for Panicking {
    async fn execute(&self, _ctx: &InvocationContext) -> Result<(), CommandError> {
        panic!("command body panicked");
    }
}

fn definition(name: &str, aliases: &[&str]) -> CommandDefinition {
    CommandDefinition::new()
        .name(name)
        .description(format!("The {} command", name))
        .aliases(aliases.iter().copied())
        .handler(Echo("echo"))
}

fn register(registry: &mut CommandRegistry, definition: CommandDefinition) -> Result<(), RegistryError> {
    registry.register(definition.build("test/module", None)?)?;
    Ok(())
}
