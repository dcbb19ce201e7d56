//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values. The user
/// has the new-style "0" discriminator, no avatar and no global display name.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `bot` - Whether the account is a bot account
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, name: &str, bot: bool) -> User {
    serde_json::from_value(user_json(user_id, name, bot))
        .expect("Failed to create test user - invalid JSON structure")
}

/// Raw JSON representation of a user, shared with the message factory.
pub(crate) fn user_json(user_id: u64, name: &str, bot: bool) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "system": false,
        "public_flags": 0,
    })
}
