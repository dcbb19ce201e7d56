//! Built-in text commands.
//!
//! Each submodule exposes a `definition()` returning its command definition; the list
//! below is the single place where commands are registered, grouped the way they are
//! shown by `help`.

pub mod doit;
pub mod help;
pub mod ping;
pub mod set;

use crate::server::service::command::loader::CommandModule;

/// The command modules shipped with both bots, in registration order.
pub fn builtin_modules() -> Vec<CommandModule> {
    vec![
        CommandModule::new("fun", "doit", doit::definition()),
        CommandModule::new("utility", "help", help::definition()),
        CommandModule::new("utility", "ping", ping::definition()),
        CommandModule::new("utility", "set", set::definition()),
    ]
}

#[cfg(test)]
mod test;
