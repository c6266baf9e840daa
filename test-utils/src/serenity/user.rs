//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User using the new username system (no discriminator).
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str) -> User {
    serde_json::from_value(user_json(user_id, username))
        .expect("Failed to create test user - invalid JSON structure")
}

pub(crate) fn user_json(user_id: u64, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
    })
}
