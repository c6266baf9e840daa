//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role.
///
/// All other fields are set to defaults (no color, not hoisted, not managed, not
/// mentionable, zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, position: i16) -> Role {
    serde_json::from_value(role_json(role_id, name, position))
        .expect("Failed to create test role - invalid JSON structure")
}

/// JSON payload for a role as Discord sends it inside guild objects.
pub(crate) fn role_json(role_id: u64, name: &str, position: i16) -> serde_json::Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    })
}
