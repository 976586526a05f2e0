use serenity::all::{Client, GatewayIntents};

use crate::server::bot::handler::Handler;
use crate::server::config::Config;
use crate::server::error::AppError;
use crate::server::state::BotState;

/// Initializes the Discord bot client
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, state: BotState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Blocks until the gateway connection shuts down.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
