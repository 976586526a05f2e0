//! Discord bot integration.
//!
//! This module connects the bot to Discord's gateway, registers the slash commands,
//! and routes interactions (slash commands and button presses) to the service
//! layer. The bot runs in a separate tokio task so it does not block the liveness
//! endpoint or the eviction scheduler.
//!
//! # Gateway Intents
//!
//! Interactions are delivered regardless of intents, so the bot only requests
//! `GUILDS`.

pub mod commands;
pub mod handler;
pub mod start;
