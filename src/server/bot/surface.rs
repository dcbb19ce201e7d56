//! Serenity implementations of the outbound chat surfaces.
//!
//! `SerenityChannel` is bound to the inbound message so replies and reactions can
//! reference it. `SerenityGuild` resolves members through the cache first and the
//! HTTP API second.

use serenity::{
    all::{
        ChannelId, Context, CreateEmbed, CreateEmbedFooter, CreateMessage, EditMember,
        EditMessage, GuildId, Member, MessageId, MessageReference, ReactionType, Timestamp,
        UserId,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    bot::permission::capabilities_from_permissions,
    error::platform::PlatformError,
    model::{
        capability::CapabilitySet,
        embed::Embed,
        surface::{Channel, GuildSurface, MemberInfo, Response, SentMessage},
    },
};

/// Renders a platform-neutral embed into serenity's builder.
pub fn build_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();

    if let Some(title) = &embed.title {
        builder = builder.title(title);
    }
    if let Some(description) = &embed.description {
        builder = builder.description(description);
    }
    if let Some(color) = embed.color {
        builder = builder.color(color);
    }
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }
    if let Some(image) = &embed.image {
        builder = builder.image(image);
    }
    if embed.timestamp {
        builder = builder.timestamp(Timestamp::now());
    }

    builder
}

fn create_message(response: Response) -> CreateMessage {
    match response {
        Response::Text(content) => CreateMessage::new().content(content),
        Response::Embed(embed) => CreateMessage::new().embed(build_embed(&embed)),
    }
}

/// Channel of one inbound message.
pub struct SerenityChannel {
    http: Arc<Http>,
    channel_id: ChannelId,
    message_id: MessageId,
}

impl SerenityChannel {
    pub fn new(http: Arc<Http>, channel_id: ChannelId, message_id: MessageId) -> Self {
        Self {
            http,
            channel_id,
            message_id,
        }
    }

    async fn post(&self, message: CreateMessage) -> Result<SentMessage, PlatformError> {
        let sent = self.channel_id.send_message(&self.http, message).await?;

        Ok(SentMessage {
            id: sent.id.get(),
            created_at: sent.timestamp.to_utc(),
        })
    }
}

#[async_trait]
impl Channel for SerenityChannel {
    async fn reply(&self, response: Response) -> Result<SentMessage, PlatformError> {
        let message = create_message(response)
            .reference_message(MessageReference::from((self.channel_id, self.message_id)));

        self.post(message).await
    }

    async fn send(&self, response: Response) -> Result<SentMessage, PlatformError> {
        self.post(create_message(response)).await
    }

    async fn edit(&self, message: &SentMessage, response: Response) -> Result<(), PlatformError> {
        let edit = match response {
            Response::Text(content) => EditMessage::new().content(content),
            Response::Embed(embed) => EditMessage::new().content("").embed(build_embed(&embed)),
        };

        self.http
            .edit_message(self.channel_id, MessageId::new(message.id), &edit, vec![])
            .await?;

        Ok(())
    }

    async fn react(&self, emoji: &str) -> Result<(), PlatformError> {
        self.channel_id
            .create_reaction(
                &self.http,
                self.message_id,
                ReactionType::Unicode(emoji.to_string()),
            )
            .await?;

        Ok(())
    }
}

/// Guild of one inbound message.
pub struct SerenityGuild {
    ctx: Context,
    guild_id: GuildId,
}

impl SerenityGuild {
    pub fn new(ctx: Context, guild_id: GuildId) -> Self {
        Self { ctx, guild_id }
    }

    /// Builds the command-facing view of a member.
    ///
    /// Permissions and role positions come from the cached guild; if the guild is not
    /// cached the member is reported without capabilities.
    fn member_info(&self, member: &Member) -> MemberInfo {
        let capabilities = self
            .ctx
            .cache
            .guild(self.guild_id)
            .map(|guild| capabilities_from_permissions(guild.member_permissions(member)))
            .unwrap_or_else(CapabilitySet::new);

        let highest_role_position = member
            .highest_role_info(&self.ctx.cache)
            .map(|(_, position)| position)
            .unwrap_or(0);

        MemberInfo {
            user_id: member.user.id.get(),
            tag: member.user.tag(),
            highest_role_position,
            capabilities,
        }
    }
}

/// Unknown member responses are reported by Discord as 404.
fn is_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}

#[async_trait]
impl GuildSurface for SerenityGuild {
    fn guild_id(&self) -> u64 {
        self.guild_id.get()
    }

    async fn owner_id(&self) -> Result<u64, PlatformError> {
        let cached = self.ctx.cache.guild(self.guild_id).map(|guild| guild.owner_id);

        let owner_id = match cached {
            Some(owner_id) => owner_id,
            None => self.ctx.http.get_guild(self.guild_id).await?.owner_id,
        };

        Ok(owner_id.get())
    }

    async fn member(&self, user_id: u64) -> Result<Option<MemberInfo>, PlatformError> {
        match self.guild_id.member(&self.ctx, UserId::new(user_id)).await {
            Ok(member) => Ok(Some(self.member_info(&member))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn bot_member(&self) -> Result<MemberInfo, PlatformError> {
        let bot_id = self.ctx.cache.current_user().id;

        self.member(bot_id.get()).await?.ok_or_else(|| {
            PlatformError::Unavailable(format!(
                "Bot is not a member of guild {}",
                self.guild_id
            ))
        })
    }

    async fn set_nickname(&self, user_id: u64, nickname: &str) -> Result<(), PlatformError> {
        self.guild_id
            .edit_member(
                &self.ctx.http,
                UserId::new(user_id),
                EditMember::new().nickname(nickname),
            )
            .await?;

        Ok(())
    }
}
