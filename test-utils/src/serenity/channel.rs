//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::{ChannelType, GuildChannel};

/// Creates a test guild channel of the given type with no permission overwrites.
///
/// # Arguments
/// - `guild_id` - Guild the channel belongs to
/// - `channel_id` - Discord channel ID (snowflake)
/// - `kind` - Channel type
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(guild_id: u64, channel_id: u64, kind: ChannelType) -> GuildChannel {
    serde_json::from_value(channel_json(guild_id, channel_id, kind))
        .expect("Failed to create test channel - invalid JSON structure")
}

pub(crate) fn channel_json(guild_id: u64, channel_id: u64, kind: ChannelType) -> serde_json::Value {
    serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": u8::from(kind),
        "name": format!("channel-{}", channel_id),
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    })
}
