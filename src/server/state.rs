//! Bot state shared across event handlers and scheduled jobs.
//!
//! The state is built once during startup and cloned into the Discord event
//! handler and the eviction scheduler. It holds:
//! - The access gate built from the allow-list
//! - The channel target document
//! - The broadcast service for plain messages
//! - The poll engine, which owns the poll store

use std::sync::Arc;

use crate::server::{
    model::channel::ChannelDocument,
    service::{access::AccessGate, broadcast::BroadcastService, poll::PollEngine},
};

/// All fields are cheap to clone: they are reference-counted or hold
/// reference-counted handles.
#[derive(Clone)]
pub struct BotState {
    /// Allow-list check for slash commands.
    pub gate: Arc<AccessGate>,

    /// Per-guild, per-category channel targets, read-only at runtime.
    pub channels: Arc<ChannelDocument>,

    /// Sends `broadcast` messages.
    pub broadcasts: BroadcastService,

    /// Creates polls, records clicks and evicts expired polls.
    pub polls: Arc<PollEngine>,
}

impl BotState {
    pub fn new(
        gate: Arc<AccessGate>,
        channels: Arc<ChannelDocument>,
        broadcasts: BroadcastService,
        polls: Arc<PollEngine>,
    ) -> Self {
        Self {
            gate,
            channels,
            broadcasts,
            polls,
        }
    }
}
