//! Ready event handler for bot initialization.
//!
//! The `ready` event fires once per gateway session after the initial handshake and
//! indicates the bot can receive and process other events.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `_ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord and sees {} guilds",
        ready.user.name,
        ready.guilds.len()
    );
}
