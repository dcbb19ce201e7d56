//! Bot runtime and health server.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Serenity clients, event handlers and the built-in commands
//! - **Service Layer** (`service/`) - Command pipeline (registry, gates, dispatcher),
//!   bot status tracking and health reporting
//! - **Model Layer** (`model/`) - Domain models: commands, capabilities, embeds and the
//!   outbound chat surface traits
//! - **Controller Layer** (`controller/`) - Health server HTTP handlers
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based bot and server configuration
//! - **State** (`state`) - Shared health server state
//! - **Startup** (`startup`) - Command registry assembly, listener binding, shutdown
//! - **Router** (`router`) - Axum route configuration
//!
//! # Message Flow
//!
//! 1. **Bot** handler receives a gateway message and converts it to an inbound message
//! 2. **Dispatcher** parses it, resolves the command and applies the permission and
//!    cooldown gates
//! 3. **Command** body runs against the channel and guild surfaces
//! 4. Failures are contained at the dispatcher and reported to the caller once

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
pub mod test_support;
