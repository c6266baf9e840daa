use serenity::all::{CacheHttp, GuildId, Member, PrivateChannel, User, UserId};

/// Gets a user from the cache, falling back to a REST request.
///
/// # Arguments
/// - `cache_http` - Discord client (cache is optional)
/// - `user_id` - User to look up
///
/// # Returns
/// - `Ok(User)` - Cached or freshly fetched user
/// - `Err(serenity::Error)` - REST request failed, e.g. unknown user
pub async fn get_user_cached(
    cache_http: impl CacheHttp,
    user_id: UserId,
) -> Result<User, serenity::Error> {
    if let Some(user) = cache_http.cache().and_then(|cache| cache.user(user_id)) {
        return Ok(User::clone(&user));
    }

    cache_http.http().get_user(user_id).await
}

/// Gets a guild member from the cache, falling back to a REST request.
///
/// # Arguments
/// - `cache_http` - Discord client (cache is optional)
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Member's user ID
///
/// # Returns
/// - `Ok(Member)` - Cached or freshly fetched member
/// - `Err(serenity::Error)` - REST request failed, e.g. user is not in the guild
pub async fn get_member_cached(
    cache_http: impl CacheHttp,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<Member, serenity::Error> {
    if let Some(member) = cache_http.cache().and_then(|cache| {
        cache
            .guild(guild_id)
            .and_then(|guild| guild.members.get(&user_id).cloned())
    }) {
        return Ok(member);
    }

    cache_http.http().get_member(guild_id, user_id).await
}

/// Gets the bot's own member in a guild.
pub async fn get_bot_member_cached(
    cache_http: impl CacheHttp,
    guild_id: GuildId,
) -> Result<Member, serenity::Error> {
    let bot_id = match cache_http.cache() {
        Some(cache) => cache.current_user().id,
        None => cache_http.http().get_current_user().await?.id,
    };

    get_member_cached(cache_http, guild_id, bot_id).await
}

/// Opens a DM channel with a user.
///
/// Discord returns the existing channel when one is already open, so calling this
/// repeatedly for the same user is safe.
pub async fn create_dm(
    cache_http: impl CacheHttp,
    user_id: UserId,
) -> Result<PrivateChannel, serenity::Error> {
    user_id.create_dm_channel(cache_http).await
}
