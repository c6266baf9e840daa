use serenity::all::{Cache, ChannelType, GuildChannel, Member, Permissions};

/// Checks whether a member can post messages in a guild channel.
///
/// Returns false when the channel is no longer in the cache (it was deleted) or its
/// guild is not cached. Otherwise the member's effective permissions in the channel are
/// compared against what the channel type requires.
///
/// # Arguments
/// - `cache` - Serenity cache holding the channel's guild
/// - `channel` - Channel to check
/// - `member` - Member whose permissions are evaluated
pub fn can_write_in_channel(cache: &Cache, channel: &GuildChannel, member: &Member) -> bool {
    let Some(guild) = cache.guild(channel.guild_id) else {
        return false;
    };

    let exists = guild.channels.contains_key(&channel.id)
        || guild.threads.iter().any(|thread| thread.id == channel.id);
    if !exists {
        return false;
    }

    let permissions = guild.user_permissions_in(channel, member);
    let locked = channel
        .thread_metadata
        .as_ref()
        .is_some_and(|metadata| metadata.locked);

    channel_allows_writing(channel.kind, locked, permissions)
}

/// Permission rules for posting in a channel of the given type.
///
/// Categories, forums and media channels only hold messages in their child channels or
/// threads, so nobody can write in them directly.
pub fn channel_allows_writing(kind: ChannelType, locked: bool, permissions: Permissions) -> bool {
    match kind {
        ChannelType::Text | ChannelType::News => {
            permissions.contains(Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES)
        }
        ChannelType::Voice | ChannelType::Stage => permissions.contains(
            Permissions::VIEW_CHANNEL | Permissions::CONNECT | Permissions::SEND_MESSAGES,
        ),
        ChannelType::NewsThread | ChannelType::PublicThread | ChannelType::PrivateThread => {
            permissions
                .contains(Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES_IN_THREADS)
                && (!locked || permissions.contains(Permissions::MANAGE_THREADS))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{
        create_test_cache, create_test_channel, create_test_member, TEST_GUILD_OWNER_ID,
    };

    const WRITE: Permissions = Permissions::VIEW_CHANNEL.union(Permissions::SEND_MESSAGES);
    const THREAD_WRITE: Permissions =
        Permissions::VIEW_CHANNEL.union(Permissions::SEND_MESSAGES_IN_THREADS);

    #[test]
    fn text_channels_need_view_and_send() {
        assert!(channel_allows_writing(ChannelType::Text, false, WRITE));
        assert!(channel_allows_writing(ChannelType::News, false, WRITE));
        assert!(!channel_allows_writing(
            ChannelType::Text,
            false,
            Permissions::VIEW_CHANNEL
        ));
        assert!(!channel_allows_writing(
            ChannelType::Text,
            false,
            Permissions::SEND_MESSAGES
        ));
    }

    #[test]
    fn voice_channels_also_need_connect() {
        assert!(!channel_allows_writing(ChannelType::Voice, false, WRITE));
        assert!(channel_allows_writing(
            ChannelType::Voice,
            false,
            WRITE | Permissions::CONNECT
        ));
        assert!(channel_allows_writing(
            ChannelType::Stage,
            false,
            WRITE | Permissions::CONNECT
        ));
    }

    #[test]
    fn threads_use_thread_send_permission() {
        assert!(channel_allows_writing(
            ChannelType::PublicThread,
            false,
            THREAD_WRITE
        ));
        assert!(!channel_allows_writing(ChannelType::PrivateThread, false, WRITE));
    }

    #[test]
    fn locked_threads_need_manage_threads() {
        assert!(!channel_allows_writing(
            ChannelType::PublicThread,
            true,
            THREAD_WRITE
        ));
        assert!(channel_allows_writing(
            ChannelType::NewsThread,
            true,
            THREAD_WRITE | Permissions::MANAGE_THREADS
        ));
    }

    #[test]
    fn containers_never_writable() {
        assert!(!channel_allows_writing(
            ChannelType::Category,
            false,
            Permissions::all()
        ));
        assert!(!channel_allows_writing(
            ChannelType::Forum,
            false,
            Permissions::all()
        ));
    }

    #[test]
    fn uncached_channel_is_not_writable() {
        let cache = Cache::new();
        let channel = create_test_channel(100, 300, ChannelType::Text);
        let member = create_test_member(100, 200, "someone", &[]);

        assert!(!can_write_in_channel(&cache, &channel, &member));
    }

    #[test]
    fn deleted_channel_in_cached_guild_is_not_writable() {
        let cache = create_test_cache(100, &[(301, ChannelType::Text)], &[TEST_GUILD_OWNER_ID]);
        let channel = create_test_channel(100, 300, ChannelType::Text);
        let owner = create_test_member(100, TEST_GUILD_OWNER_ID, "owner", &[]);

        assert!(!can_write_in_channel(&cache, &channel, &owner));
    }

    #[test]
    fn cached_channel_uses_member_permissions() {
        let cache = create_test_cache(
            100,
            &[(300, ChannelType::Text)],
            &[TEST_GUILD_OWNER_ID, 200],
        );
        let channel = create_test_channel(100, 300, ChannelType::Text);
        let owner = create_test_member(100, TEST_GUILD_OWNER_ID, "owner", &[]);
        let member = create_test_member(100, 200, "someone", &[]);

        assert!(can_write_in_channel(&cache, &channel, &owner));
        assert!(!can_write_in_channel(&cache, &channel, &member));
    }

    #[test]
    fn cached_container_channel_is_not_writable_by_owner() {
        let cache = create_test_cache(100, &[(300, ChannelType::Category)], &[]);
        let channel = create_test_channel(100, 300, ChannelType::Category);
        let owner = create_test_member(100, TEST_GUILD_OWNER_ID, "owner", &[]);

        assert!(!can_write_in_channel(&cache, &channel, &owner));
    }
}
