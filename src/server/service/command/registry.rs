//! Command registry.
//!
//! Maps every lookup key (canonical name or alias) to the shared descriptor. The
//! registry is built once at startup and only read afterwards; it is shared between
//! bots and invocations behind an `Arc` without any locking.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::server::{error::command::RegistryError, model::command::CommandDescriptor};

/// Summary counts over the registered commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Number of unique commands.
    pub total: usize,
    /// Unique command count per category, `Uncategorized` when none was assigned.
    pub categories: BTreeMap<String, usize>,
    /// Number of alias keys.
    pub aliases: usize,
}

#[derive(Debug, Default)]
pub struct CommandRegistry {
    /// Lookup key to descriptor; names and aliases share one `Arc`.
    keys: HashMap<String, Arc<CommandDescriptor>>,
    /// Unique descriptors in registration order.
    commands: Vec<Arc<CommandDescriptor>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under its name and all of its aliases.
    ///
    /// Every key is checked before anything is inserted, so a failed registration
    /// leaves the registry unchanged and earlier registrations win.
    ///
    /// # Arguments
    /// - `descriptor` - Validated command descriptor
    ///
    /// # Returns
    /// - `Ok(Arc<CommandDescriptor>)` - The shared descriptor now stored in the registry
    /// - `Err(RegistryError::DuplicateName)` - The canonical name is already a key
    /// - `Err(RegistryError::DuplicateAlias)` - An alias is already a key, equals the
    ///   command's own name, or is declared twice
    pub fn register(
        &mut self,
        descriptor: CommandDescriptor,
    ) -> Result<Arc<CommandDescriptor>, RegistryError> {
        let name = descriptor.name().to_string();
        if self.keys.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        for (index, alias) in descriptor.aliases().iter().enumerate() {
            let repeated = descriptor.aliases()[..index].contains(alias);
            if *alias == name || repeated || self.keys.contains_key(alias) {
                return Err(RegistryError::DuplicateAlias {
                    alias: alias.clone(),
                    command: name,
                });
            }
        }

        let descriptor = Arc::new(descriptor);
        self.keys.insert(name, Arc::clone(&descriptor));
        for alias in descriptor.aliases() {
            self.keys.insert(alias.clone(), Arc::clone(&descriptor));
        }
        self.commands.push(Arc::clone(&descriptor));

        Ok(descriptor)
    }

    /// Resolves a lookup key (name or alias) to its descriptor.
    pub fn lookup(&self, key: &str) -> Option<Arc<CommandDescriptor>> {
        self.keys.get(key).cloned()
    }

    /// Unique descriptors in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<CommandDescriptor>> {
        self.commands.iter()
    }

    /// Number of unique commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of lookup keys, names and aliases together.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn stats(&self) -> RegistryStats {
        let mut categories = BTreeMap::new();
        for command in &self.commands {
            let category = command.category().unwrap_or("Uncategorized").to_string();
            *categories.entry(category).or_insert(0) += 1;
        }

        RegistryStats {
            total: self.commands.len(),
            categories,
            aliases: self.keys.len() - self.commands.len(),
        }
    }
}
