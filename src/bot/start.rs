use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::state::BotState;

/// Starts the Discord bot and runs until the gateway connection ends.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state for the event handler
///
/// # Returns
/// - `Ok(())` if the bot shuts down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, state: BotState) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS | GatewayIntents::GUILD_INVITES;

    let handler = Handler::new(state);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
