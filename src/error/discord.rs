use serenity::all::{GuildId, RoleId};
use thiserror::Error;

/// Errors raised by helpers that work on cached Discord state.
#[derive(Error, Debug)]
pub enum DiscordError {
    /// A member references a role that is not present in the guild's cached roles.
    ///
    /// Usually means the guild was not fully cached when the helper ran.
    #[error("Role {role_id} is not cached for guild {guild_id}")]
    UncachedRole { guild_id: GuildId, role_id: RoleId },
}
