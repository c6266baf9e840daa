use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting it.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::ConfigErr)` - `DISCORD_BOT_TOKEN` is not set
/// - `Err(AppError::DiscordErr)` - Serenity rejected the client configuration
pub async fn init_bot(config: &Config) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(config.bot_token()?, intents)
        .event_handler(Handler::new())
        .await?;

    Ok(client)
}

/// Connects the client and blocks until the gateway connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
