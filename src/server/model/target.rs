//! Resolved broadcast destinations.

use serenity::all::{ChannelId, GuildId, RoleId};

/// One channel a fanout pass sends to, with the roles mentioned there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    /// Roles to mention, in configured order.
    pub ping_role_ids: Vec<RoleId>,
}

/// De-duplicated targets of one category within one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildTargets {
    pub guild_id: GuildId,
    pub targets: Vec<ResolvedTarget>,
}
