//! Guild availability handler.
//!
//! Moderation actions only work on members whose highest role sits below the bot's own
//! highest role, so the bot's position is logged for every guild it becomes available in.

use serenity::all::{Context, Guild};

use crate::discord::{format_error, get_bot_member_cached, get_highest_role};

/// Handles the guild_create event when a guild becomes available or the bot joins one.
///
/// # Arguments
/// - `ctx` - Discord context used for cache and REST lookups
/// - `guild` - The guild as received from the gateway
/// - `is_new` - Whether the bot just joined the guild
pub async fn handle_guild_create(ctx: Context, guild: Guild, is_new: Option<bool>) {
    if is_new == Some(true) {
        tracing::info!("Joined guild {} ({})", guild.name, guild.id);
    }

    let member = match get_bot_member_cached(&ctx, guild.id).await {
        Ok(member) => member,
        Err(e) => {
            tracing::warn!(
                "Failed to fetch own member in guild {}: {}",
                guild.id,
                format_error(&e)
            );
            return;
        }
    };

    match get_highest_role(&guild, &member) {
        Ok(role) => tracing::debug!(
            "Highest role in guild {} ({}) is {} at position {}",
            guild.name,
            guild.id,
            role.name,
            role.position
        ),
        Err(e) => tracing::warn!("{}", e),
    }
}
