//! In-memory chat surfaces for unit tests.
//!
//! `RecordingChannel` and `FakeGuild` record every outbound effect so tests can assert
//! on what a bot user would have seen.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serenity::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::server::{
    error::platform::PlatformError,
    model::{
        bot::BotProfile,
        capability::{Capability, CapabilitySet},
        command::{Caller, InvocationContext},
        message::InboundMessage,
        surface::{Channel, GuildSurface, MemberInfo, Response, SentMessage},
    },
    service::command::registry::CommandRegistry,
};

pub const GUILD_ID: u64 = 500;
pub const OWNER_ID: u64 = 1;
pub const BOT_ID: u64 = 2;
pub const CALLER_ID: u64 = 10;
pub const TARGET_ID: u64 = 20;

/// Fixed reference time for inbound messages.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn profile() -> Arc<BotProfile> {
    Arc::new(BotProfile {
        name: "Bumbles".to_string(),
        prefix: "!".to_string(),
        color: 0x5865F2,
    })
}

pub fn capabilities(list: &[Capability]) -> CapabilitySet {
    list.iter().cloned().collect()
}

pub fn member(user_id: u64, tag: &str, position: u16, held: &[Capability]) -> MemberInfo {
    MemberInfo {
        user_id,
        tag: tag.to_string(),
        highest_role_position: position,
        capabilities: capabilities(held),
    }
}

/// Channel double recording every outbound message.
#[derive(Default)]
pub struct RecordingChannel {
    pub replies: Mutex<Vec<Response>>,
    pub sends: Mutex<Vec<Response>>,
    pub edits: Mutex<Vec<(u64, Response)>>,
    pub reactions: Mutex<Vec<String>>,
    pub fail_replies: AtomicBool,
    pub fail_sends: AtomicBool,
    pub fail_reactions: AtomicBool,
    pub fail_edits: AtomicBool,
    /// Fails replies and sends carrying an embed; text still goes through.
    pub fail_embeds: AtomicBool,
    /// Offset added to `base_time()` for the timestamp of sent messages.
    pub send_delay_ms: AtomicU64,
    next_id: AtomicU64,
}

impl RecordingChannel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replies(&self) -> Vec<Response> {
        self.replies.lock().unwrap().clone()
    }

    pub fn sends(&self) -> Vec<Response> {
        self.sends.lock().unwrap().clone()
    }

    pub fn edits(&self) -> Vec<(u64, Response)> {
        self.edits.lock().unwrap().clone()
    }

    pub fn reactions(&self) -> Vec<String> {
        self.reactions.lock().unwrap().clone()
    }

    /// Number of messages posted to the channel, replies and sends combined.
    pub fn posted(&self) -> usize {
        self.replies.lock().unwrap().len() + self.sends.lock().unwrap().len()
    }

    fn rejects(&self, response: &Response) -> bool {
        matches!(response, Response::Embed(_)) && self.fail_embeds.load(Ordering::SeqCst)
    }

    fn sent(&self) -> SentMessage {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1000;
        let delay = self.send_delay_ms.load(Ordering::SeqCst) as i64;

        SentMessage {
            id,
            created_at: base_time() + TimeDelta::milliseconds(delay),
        }
    }
}

fn unavailable(what: &str) -> PlatformError {
    PlatformError::Unavailable(format!("{} failed", what))
}

#[async_trait]
impl Channel for RecordingChannel {
    async fn reply(&self, response: Response) -> Result<SentMessage, PlatformError> {
        if self.fail_replies.load(Ordering::SeqCst) || self.rejects(&response) {
            return Err(unavailable("reply"));
        }
        self.replies.lock().unwrap().push(response);
        Ok(self.sent())
    }

    async fn send(&self, response: Response) -> Result<SentMessage, PlatformError> {
        if self.fail_sends.load(Ordering::SeqCst) || self.rejects(&response) {
            return Err(unavailable("send"));
        }
        self.sends.lock().unwrap().push(response);
        Ok(self.sent())
    }

    async fn edit(&self, message: &SentMessage, response: Response) -> Result<(), PlatformError> {
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(unavailable("edit"));
        }
        self.edits.lock().unwrap().push((message.id, response));
        Ok(())
    }

    async fn react(&self, emoji: &str) -> Result<(), PlatformError> {
        if self.fail_reactions.load(Ordering::SeqCst) {
            return Err(unavailable("react"));
        }
        self.reactions.lock().unwrap().push(emoji.to_string());
        Ok(())
    }
}

/// Guild double with a fixed member list.
pub struct FakeGuild {
    pub owner_id: u64,
    pub members: HashMap<u64, MemberInfo>,
    pub nickname_changes: Mutex<Vec<(u64, String)>>,
    pub fail_member_lookup: AtomicBool,
    pub fail_nickname_change: AtomicBool,
}

impl FakeGuild {
    /// A guild with the bot, at role position 10, holding `bot_capabilities`.
    pub fn new(bot_capabilities: &[Capability]) -> Self {
        let mut members = HashMap::new();
        members.insert(BOT_ID, member(BOT_ID, "Bumbles#0", 10, bot_capabilities));

        Self {
            owner_id: OWNER_ID,
            members,
            nickname_changes: Mutex::new(Vec::new()),
            fail_member_lookup: AtomicBool::new(false),
            fail_nickname_change: AtomicBool::new(false),
        }
    }

    pub fn with_member(mut self, member: MemberInfo) -> Self {
        self.members.insert(member.user_id, member);
        self
    }

    pub fn nickname_changes(&self) -> Vec<(u64, String)> {
        self.nickname_changes.lock().unwrap().clone()
    }
}

#[async_trait]
impl GuildSurface for FakeGuild {
    fn guild_id(&self) -> u64 {
        GUILD_ID
    }

    async fn owner_id(&self) -> Result<u64, PlatformError> {
        Ok(self.owner_id)
    }

    async fn member(&self, user_id: u64) -> Result<Option<MemberInfo>, PlatformError> {
        if self.fail_member_lookup.load(Ordering::SeqCst) {
            return Err(unavailable("member lookup"));
        }
        Ok(self.members.get(&user_id).cloned())
    }

    async fn bot_member(&self) -> Result<MemberInfo, PlatformError> {
        self.members
            .get(&BOT_ID)
            .cloned()
            .ok_or_else(|| unavailable("bot member lookup"))
    }

    async fn set_nickname(&self, user_id: u64, nickname: &str) -> Result<(), PlatformError> {
        if self.fail_nickname_change.load(Ordering::SeqCst) {
            return Err(unavailable("nickname change"));
        }
        self.nickname_changes
            .lock()
            .unwrap()
            .push((user_id, nickname.to_string()));
        Ok(())
    }
}

/// A guild message from `CALLER_ID` received at `base_time()`.
pub fn inbound(
    content: &str,
    channel: &Arc<RecordingChannel>,
    guild: Option<&Arc<FakeGuild>>,
) -> InboundMessage {
    InboundMessage {
        author_id: CALLER_ID,
        author_tag: "caller#0".to_string(),
        author_is_bot: false,
        content: content.to_string(),
        mentions: Vec::new(),
        received_at: base_time(),
        gateway_latency: None,
        channel: channel.clone(),
        guild: guild.map(|guild| guild.clone() as Arc<dyn GuildSurface>),
    }
}

/// Invocation context for calling a command body directly.
pub fn invocation(
    args: &[&str],
    channel: &Arc<RecordingChannel>,
    guild: Option<&Arc<FakeGuild>>,
    registry: Arc<CommandRegistry>,
) -> InvocationContext {
    InvocationContext {
        caller: Caller {
            id: CALLER_ID,
            tag: "caller#0".to_string(),
        },
        caller_capabilities: CapabilitySet::new(),
        is_private_channel: guild.is_none(),
        raw_args: args.iter().map(|arg| arg.to_string()).collect(),
        command_key: String::new(),
        mentions: Vec::new(),
        received_at: base_time(),
        gateway_latency: None,
        channel: channel.clone(),
        guild: guild.map(|guild| guild.clone() as Arc<dyn GuildSurface>),
        registry,
        bot: profile(),
    }
}
