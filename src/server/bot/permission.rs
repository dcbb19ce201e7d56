//! Translation of Discord permission bit flags into capability tokens.

use serenity::all::Permissions;

use crate::server::model::capability::{Capability, CapabilitySet};

/// Permission flags the bots care about and the capability each one grants.
static CAPABILITY_FLAGS: &[(Permissions, Capability)] = &[
    (Permissions::ADMINISTRATOR, Capability::ADMINISTRATOR),
    (Permissions::MANAGE_GUILD, Capability::MANAGE_GUILD),
    (Permissions::MANAGE_ROLES, Capability::MANAGE_ROLES),
    (Permissions::MANAGE_CHANNELS, Capability::MANAGE_CHANNELS),
    (Permissions::MANAGE_MESSAGES, Capability::MANAGE_MESSAGES),
    (Permissions::MANAGE_NICKNAMES, Capability::MANAGE_NICKNAMES),
    (Permissions::CHANGE_NICKNAME, Capability::CHANGE_NICKNAME),
    (Permissions::KICK_MEMBERS, Capability::KICK_MEMBERS),
    (Permissions::BAN_MEMBERS, Capability::BAN_MEMBERS),
    (Permissions::SEND_MESSAGES, Capability::SEND_MESSAGES),
    (Permissions::EMBED_LINKS, Capability::EMBED_LINKS),
    (Permissions::ADD_REACTIONS, Capability::ADD_REACTIONS),
];

/// Maps guild-level permissions to the capability set used by the permission gate.
///
/// Administrators are expected to arrive with every bit set (serenity's permission
/// calculation does this), so no special casing happens here.
pub fn capabilities_from_permissions(permissions: Permissions) -> CapabilitySet {
    CAPABILITY_FLAGS
        .iter()
        .filter(|(flag, _)| permissions.contains(*flag))
        .map(|(_, capability)| capability.clone())
        .collect()
}
