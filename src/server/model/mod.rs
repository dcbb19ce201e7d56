//! Server-side domain models.
//!
//! Platform-neutral types shared by the command pipeline, the command bodies and the
//! bot integration: capabilities, command descriptors, inbound messages, outbound
//! surfaces and rich content payloads.

pub mod bot;
pub mod capability;
pub mod command;
pub mod embed;
pub mod message;
pub mod surface;
