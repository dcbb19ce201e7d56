//! The command dispatch and guard pipeline.
//!
//! - `registry` - immutable map from names and aliases to command descriptors
//! - `loader` - builds the registry from the explicit list of command modules
//! - `permission` - capability check of callers against command requirements
//! - `cooldown` - per caller and command rate limiting
//! - `dispatcher` - parses inbound messages and drives the gates and execution

pub mod cooldown;
pub mod dispatcher;
pub mod loader;
pub mod permission;
pub mod registry;

#[cfg(test)]
mod test;
