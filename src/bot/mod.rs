//! Discord bot integration.
//!
//! The bot connects to Discord's gateway through Serenity, which owns the connection
//! lifecycle, caching and REST access. Event handlers in `handler` only log and inspect
//! cached state through the helpers in `crate::discord`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild, channel and role events and populate the cache
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `GUILD_MEMBERS` - Receive guild member changes (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
