use serenity::all::Member;

/// Creates a test Serenity Member as delivered with a member-join event.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member joined
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Discord username
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user_id: u64, username: &str) -> Member {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "nick": null,
        "avatar": null,
        "roles": [],
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
