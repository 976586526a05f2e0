use serenity::all::UserId;
use std::sync::Arc;

use crate::server::{
    model::channel::ChannelDocument,
    service::{
        fanout::{FanoutBroadcaster, FanoutReport},
        render::BroadcastRenderer,
        role::RoleNameResolver,
        target::TargetResolver,
    },
};

/// Parameters of a `broadcast` command.
#[derive(Debug, Clone)]
pub struct BroadcastParam {
    pub category: String,
    pub message: String,
    pub no_ping: bool,
    pub sender_id: UserId,
}

/// Sends operator messages to every channel of a category.
#[derive(Clone)]
pub struct BroadcastService {
    channels: Arc<ChannelDocument>,
    broadcaster: FanoutBroadcaster,
    roles: RoleNameResolver,
}

impl BroadcastService {
    pub fn new(
        channels: Arc<ChannelDocument>,
        broadcaster: FanoutBroadcaster,
        roles: RoleNameResolver,
    ) -> Self {
        Self {
            channels,
            broadcaster,
            roles,
        }
    }

    /// Broadcasts a message to the category's channels in every guild.
    ///
    /// # Arguments
    /// - `param` - Category, message, ping mode and sender
    ///
    /// # Returns
    /// - `FanoutReport` - Per-channel outcome (empty when the category has no channel)
    pub async fn broadcast(&self, param: &BroadcastParam) -> FanoutReport {
        let targets = TargetResolver::new(&self.channels).resolve_all(&param.category);

        tracing::info!(
            "User {} broadcasting to {} channel(s) of category '{}'",
            param.sender_id,
            targets.len(),
            param.category
        );

        let renderer = BroadcastRenderer {
            roles: &self.roles,
            message: &param.message,
            sender_id: param.sender_id,
            no_ping: param.no_ping,
        };

        self.broadcaster.send(&targets, &renderer).await
    }
}
