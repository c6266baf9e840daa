//! Test factory for a Serenity cache seeded with one guild.

use serenity::all::{Cache, ChannelType, GuildCreateEvent};

/// Creates a cache holding a single guild, as if its GUILD_CREATE event had arrived.
///
/// Members are created without roles and named `user-<id>`. The guild is owned by
/// [`TEST_GUILD_OWNER_ID`](super::guild::TEST_GUILD_OWNER_ID), who is not added as a
/// member unless listed in `member_ids`.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `channels` - Channel IDs and types to place in the guild
/// - `member_ids` - User IDs to place in the guild's member list
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildCreateEvent (indicates invalid test data)
pub fn create_test_cache(
    guild_id: u64,
    channels: &[(u64, ChannelType)],
    member_ids: &[u64],
) -> Cache {
    let mut guild = super::guild::guild_json(guild_id, "Test Guild");
    guild["channels"] = channels
        .iter()
        .map(|&(channel_id, kind)| super::channel::channel_json(guild_id, channel_id, kind))
        .collect();
    guild["members"] = member_ids
        .iter()
        .map(|&user_id| {
            super::member::member_json(guild_id, user_id, &format!("user-{}", user_id), &[])
        })
        .collect();

    let mut event: GuildCreateEvent = serde_json::from_value(guild)
        .expect("Failed to create test guild event - invalid JSON structure");

    let cache = Cache::new();
    cache.update(&mut event);
    cache
}
