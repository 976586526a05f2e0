//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Register the global slash commands

use serenity::all::{Command, Context, Ready};

use crate::server::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers (or overwrites) the global slash commands. A registration failure
/// is logged; the bot keeps running and still serves button presses on existing
/// polls.
///
/// # Arguments
/// - `ctx` - Discord context used for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    match Command::set_global_commands(&ctx.http, commands::all()).await {
        Ok(registered) => {
            tracing::info!("Registered {} slash command(s)", registered.len());
        }
        Err(e) => {
            tracing::error!("Failed to register slash commands: {}", e);
        }
    }
}
