//! Test factory for creating Serenity Message objects.
//!
//! Messages are built from the same JSON shape Discord sends in `MESSAGE_CREATE`
//! gateway events, with attachments, embeds and reactions left empty.

use serenity::all::{Message, User};

use super::user::user_json;

/// Creates a test Serenity Message.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `guild_id` - Guild of the channel, `None` for a direct message
/// - `author` - Author of the message
/// - `content` - Raw message text
/// - `mentions` - Users mentioned in the message, in mention order
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author: &User,
    content: &str,
    mentions: &[&User],
) -> Message {
    let mentions: Vec<serde_json::Value> = mentions
        .iter()
        .map(|user| user_json(user.id.get(), &user.name, user.bot))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": user_json(author.id.get(), &author.name, author.bot),
        "content": content,
        "timestamp": "2024-01-01T12:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": mentions,
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
