use serenity::all::{ChannelId, GuildId};
use std::collections::HashSet;

use crate::server::{
    model::{
        channel::ChannelDocument,
        target::{GuildTargets, ResolvedTarget},
    },
    util::parse::parse_u64_from_string,
};

/// Resolves a category name into the channels a broadcast is sent to.
pub struct TargetResolver<'a> {
    document: &'a ChannelDocument,
}

impl<'a> TargetResolver<'a> {
    pub fn new(document: &'a ChannelDocument) -> Self {
        Self { document }
    }

    /// Resolves `category` for every configured guild.
    ///
    /// Channels listed more than once for the same guild and category are kept
    /// once, with the ping roles of their first occurrence. A guild without the
    /// category yields an empty target list rather than an error. Guild keys that
    /// are not valid snowflakes are skipped with a warning.
    ///
    /// # Arguments
    /// - `category` - Category name, matched case-insensitively
    ///
    /// # Returns
    /// - `Vec<GuildTargets>` - One entry per valid guild, in document order
    pub fn resolve(&self, category: &str) -> Vec<GuildTargets> {
        let mut resolved = Vec::with_capacity(self.document.guilds.len());

        for (guild_key, categories) in &self.document.guilds {
            let guild_id = match parse_u64_from_string(guild_key) {
                Ok(id) if id != 0 => GuildId::new(id),
                Ok(_) | Err(_) => {
                    tracing::warn!("Skipping invalid guild ID '{}' in channel document", guild_key);
                    continue;
                }
            };

            let channels = categories
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(category))
                .map(|(_, channels)| channels.as_slice())
                .unwrap_or_default();

            let mut seen: HashSet<ChannelId> = HashSet::new();
            let targets = channels
                .iter()
                .filter(|channel| seen.insert(channel.id))
                .map(|channel| ResolvedTarget {
                    guild_id,
                    channel_id: channel.id,
                    ping_role_ids: channel.ping_role_ids.clone(),
                })
                .collect();

            resolved.push(GuildTargets { guild_id, targets });
        }

        resolved
    }

    /// Resolves `category` across all guilds into a single ordered list.
    pub fn resolve_all(&self, category: &str) -> Vec<ResolvedTarget> {
        self.resolve(category)
            .into_iter()
            .flat_map(|guild| guild.targets)
            .collect()
    }
}
