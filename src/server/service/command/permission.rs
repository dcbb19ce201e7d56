//! Permission gate.

use crate::server::{error::command::GateRejection, model::capability::CapabilitySet};

/// Stateless check of a caller's capabilities against a command's requirements.
pub struct PermissionGate;

impl PermissionGate {
    /// Decides whether a caller may run a command.
    ///
    /// Capability-gated commands only exist in a guild context, so a private channel is
    /// rejected before the caller's capabilities are considered.
    ///
    /// # Arguments
    /// - `required` - Capabilities declared by the command
    /// - `held` - Capabilities of the caller
    /// - `is_private_channel` - The message arrived in a one-to-one channel
    ///
    /// # Returns
    /// - `Ok(())` - Allowed
    /// - `Err(GateRejection::NoGuildContext)` - Gated command used in a private channel
    /// - `Err(GateRejection::MissingCapabilities)` - The required capabilities not held
    pub fn check(
        required: &CapabilitySet,
        held: &CapabilitySet,
        is_private_channel: bool,
    ) -> Result<(), GateRejection> {
        if required.is_empty() {
            return Ok(());
        }

        if is_private_channel {
            return Err(GateRejection::NoGuildContext);
        }

        let missing = required.missing_from(held);
        if !missing.is_empty() {
            return Err(GateRejection::MissingCapabilities(missing));
        }

        Ok(())
    }
}
