//! Errors of the command pipeline.
//!
//! Registration errors are raised while the registry is built and are fatal only to the
//! single command being registered. Gate rejections are user-visible and non-fatal; their
//! `Display` output is the text shown in chat. Command errors are execution failures that
//! the dispatcher contains: they are logged with full context and replaced by one generic
//! notice, never echoed to the chat surface.

use thiserror::Error;

use crate::server::{error::platform::PlatformError, model::capability::CapabilitySet};

/// Failure to add a command to the registry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A command with this canonical name is already registered.
    #[error("A command named '{0}' is already registered")]
    DuplicateName(String),

    /// An alias collides with an existing lookup key (name or alias).
    #[error("Alias '{alias}' of command '{command}' collides with an existing command or alias")]
    DuplicateAlias {
        /// The colliding alias
        alias: String,
        /// The command that declared the alias
        command: String,
    },

    /// A command module did not provide a required property.
    #[error("Command module {module} is missing '{field}'")]
    MissingField {
        /// Source label of the module, e.g. `utility/ping`
        module: String,
        /// Name of the missing property
        field: &'static str,
    },

    /// A command declared an empty alias.
    #[error("Command '{command}' declares an empty alias")]
    EmptyAlias {
        /// The command that declared the alias
        command: String,
    },
}

/// A guard check that short-circuited dispatch before execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateRejection {
    /// A capability-gated command was invoked from a private channel.
    #[error("This command can only be used in a server!")]
    NoGuildContext,

    /// The caller lacks one or more required capabilities.
    #[error("You need the following permission(s) to use this command: {0}")]
    MissingCapabilities(CapabilitySet),

    /// The caller invoked the command again before its cooldown expired.
    #[error(
        "Please wait {remaining_seconds} more second(s) before reusing the `{command}` command."
    )]
    CooldownActive {
        /// Canonical name of the command
        command: String,
        /// Whole seconds until the command may be used again
        remaining_seconds: u64,
    },
}

/// Failure raised while executing a command body.
#[derive(Error, Debug)]
pub enum CommandError {
    /// An outbound platform call failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The command body panicked.
    #[error("Command panicked: {0}")]
    Panicked(String),

    /// Unexpected internal state inside a command.
    #[error("{0}")]
    Internal(String),
}
