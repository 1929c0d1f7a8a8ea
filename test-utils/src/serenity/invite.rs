use serenity::all::RichInvite;

/// Creates a test Serenity RichInvite with the given code and use count.
///
/// The invite points at a text channel named `general` and never expires.
///
/// # Panics
/// - If the JSON cannot be deserialized into a RichInvite (indicates invalid test data)
pub fn create_test_rich_invite(code: &str, uses: u64) -> RichInvite {
    serde_json::from_value(serde_json::json!({
        "code": code,
        "channel": {
            "id": "200000000000000000",
            "name": "general",
            "type": 0,
        },
        "created_at": "2024-01-01T00:00:00.000000+00:00",
        "guild": null,
        "inviter": null,
        "max_age": 0,
        "max_uses": 0,
        "temporary": false,
        "uses": uses,
    }))
    .expect("Failed to create test invite - invalid JSON structure")
}
