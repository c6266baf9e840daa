//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test guild member holding the given roles.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Member's user ID
/// - `username` - Member's username
/// - `role_ids` - Role IDs assigned to the member, excluding @everyone
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user_id: u64, username: &str, role_ids: &[u64]) -> Member {
    serde_json::from_value(member_json(guild_id, user_id, username, role_ids))
        .expect("Failed to create test member - invalid JSON structure")
}

pub(crate) fn member_json(
    guild_id: u64,
    user_id: u64,
    username: &str,
    role_ids: &[u64],
) -> serde_json::Value {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": super::user::user_json(user_id, username),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
    })
}
