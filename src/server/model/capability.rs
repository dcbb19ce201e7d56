//! Capability tokens and capability sets.
//!
//! A capability is an opaque token naming one permission a caller may hold. The
//! permission gate only compares sets of tokens; translating the chat platform's
//! permission bit flags into tokens is done by the bot integration.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// One discrete permission a caller may or may not hold.
///
/// Tokens use the platform's human-readable permission names (`ManageNicknames`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    pub const ADMINISTRATOR: Capability = Capability(Cow::Borrowed("Administrator"));
    pub const MANAGE_GUILD: Capability = Capability(Cow::Borrowed("ManageGuild"));
    pub const MANAGE_ROLES: Capability = Capability(Cow::Borrowed("ManageRoles"));
    pub const MANAGE_CHANNELS: Capability = Capability(Cow::Borrowed("ManageChannels"));
    pub const MANAGE_MESSAGES: Capability = Capability(Cow::Borrowed("ManageMessages"));
    pub const MANAGE_NICKNAMES: Capability = Capability(Cow::Borrowed("ManageNicknames"));
    pub const CHANGE_NICKNAME: Capability = Capability(Cow::Borrowed("ChangeNickname"));
    pub const KICK_MEMBERS: Capability = Capability(Cow::Borrowed("KickMembers"));
    pub const BAN_MEMBERS: Capability = Capability(Cow::Borrowed("BanMembers"));
    pub const SEND_MESSAGES: Capability = Capability(Cow::Borrowed("SendMessages"));
    pub const EMBED_LINKS: Capability = Capability(Cow::Borrowed("EmbedLinks"));
    pub const ADD_REACTIONS: Capability = Capability(Cow::Borrowed("AddReactions"));

    /// Creates a capability from an arbitrary token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered set of capabilities.
///
/// Ordering keeps user-visible listings (rejection notices, help output) stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, capability: Capability) -> bool {
        self.0.insert(capability)
    }

    pub fn contains(&self, capability: &Capability) -> bool {
        self.0.contains(capability)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.0.iter()
    }

    /// Capabilities in `self` that `other` does not hold.
    pub fn missing_from(&self, other: &CapabilitySet) -> CapabilitySet {
        Self(self.0.difference(&other.0).cloned().collect())
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = &'a Capability;
    type IntoIter = std::collections::btree_set::Iter<'a, Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders as a comma separated list of backtick-quoted tokens.
impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listed: Vec<String> = self.0.iter().map(|c| format!("`{}`", c)).collect();
        f.write_str(&listed.join(", "))
    }
}
