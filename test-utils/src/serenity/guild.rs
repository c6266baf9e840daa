//! Test factory for creating Serenity Guild objects.

use serenity::all::{Guild, Role};

/// Owner of every guild built by these factories.
///
/// Serenity grants the owner every permission, so members with this ID bypass role and
/// overwrite checks.
pub const TEST_GUILD_OWNER_ID: u64 = 100000000000000000;

/// Creates a test Serenity Guild with an @everyone role and the given roles.
///
/// The @everyone role shares the guild's ID and sits at position 0, matching how
/// Discord models it. Extra roles are stored in `guild.roles` keyed by their ID.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `roles` - Additional roles to place in the guild's role cache
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str, roles: Vec<Role>) -> Guild {
    let mut guild: Guild = serde_json::from_value(guild_json(guild_id, name))
        .expect("Failed to create test guild - invalid JSON structure");

    for mut role in roles {
        role.guild_id = guild.id;
        guild.roles.insert(role.id, role);
    }

    guild
}

pub(crate) fn guild_json(guild_id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": TEST_GUILD_OWNER_ID.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [super::role::role_json(guild_id, "@everyone", 0)],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 1,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    })
}
