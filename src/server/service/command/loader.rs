//! Startup-time assembly of the command registry.
//!
//! Commands are declared in an explicit list of modules rather than discovered on the
//! filesystem. Loading is partial-failure tolerant: an invalid module or a colliding
//! registration is logged and skipped, and the remaining modules still load.

use dioxus_logger::tracing;

use crate::server::{model::command::CommandDefinition, service::command::registry::CommandRegistry};

/// One command module: where it comes from and what it declares.
pub struct CommandModule {
    /// Group the module belongs to, e.g. `utility`; becomes the display category.
    pub group: &'static str,
    /// File-like label used in logs, e.g. `ping`.
    pub file: &'static str,
    pub definition: CommandDefinition,
}

impl CommandModule {
    pub fn new(group: &'static str, file: &'static str, definition: CommandDefinition) -> Self {
        Self {
            group,
            file,
            definition,
        }
    }

    fn label(&self) -> String {
        format!("{}/{}", self.group, self.file)
    }
}

/// Outcome counters of a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub errors: usize,
}

/// Builds a registry from the given modules.
///
/// # Arguments
/// - `modules` - Command modules in registration order
///
/// # Returns
/// - `(CommandRegistry, LoadReport)` - The registry with every module that validated
///   and registered, plus counts of loaded and rejected modules
pub fn load_commands(
    modules: impl IntoIterator<Item = CommandModule>,
) -> (CommandRegistry, LoadReport) {
    let mut registry = CommandRegistry::new();
    let mut report = LoadReport::default();

    for module in modules {
        let label = module.label();
        let category = capitalize(module.group);

        let descriptor = match module.definition.build(&label, Some(category)) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::error!("Failed to load command {}: {}", label, e);
                report.errors += 1;
                continue;
            }
        };

        match registry.register(descriptor) {
            Ok(descriptor) => {
                report.loaded += 1;
                tracing::debug!("Loaded command: {} from {}", descriptor.name(), label);
                for alias in descriptor.aliases() {
                    tracing::debug!("Registered alias: {} -> {}", alias, descriptor.name());
                }
            }
            Err(e) => {
                tracing::error!("Failed to register command {}: {}", label, e);
                report.errors += 1;
            }
        }
    }

    tracing::info!(
        "Command loading complete: {} commands loaded, {} errors",
        report.loaded,
        report.errors
    );

    (registry, report)
}

fn capitalize(group: &str) -> String {
    let mut chars = group.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
