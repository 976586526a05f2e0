use serenity::all::{GuildId, RoleId};
use std::sync::Arc;

use crate::server::service::transport::RoleDirectory;

/// Best-effort translation of role IDs into display names.
#[derive(Clone)]
pub struct RoleNameResolver {
    directory: Arc<dyn RoleDirectory>,
}

impl RoleNameResolver {
    pub fn new(directory: Arc<dyn RoleDirectory>) -> Self {
        Self { directory }
    }

    /// Resolves each role ID of `guild_id` to its name.
    ///
    /// Every ID is resolved independently: an ID missing from the guild, or every
    /// ID when the guild's roles cannot be fetched, becomes `Unknown (<id>)`. The
    /// output has one entry per input ID, in input order.
    ///
    /// # Arguments
    /// - `guild_id` - Guild owning the roles
    /// - `role_ids` - Roles to resolve
    ///
    /// # Returns
    /// - `Vec<String>` - Display names, same length and order as `role_ids`
    pub async fn resolve_names(&self, guild_id: GuildId, role_ids: &[RoleId]) -> Vec<String> {
        if role_ids.is_empty() {
            return Vec::new();
        }

        let names = match self.directory.guild_role_names(guild_id).await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("Failed to fetch roles for guild {}: {}", guild_id, e);
                Default::default()
            }
        };

        role_ids
            .iter()
            .map(|role_id| match names.get(role_id) {
                Some(name) => name.clone(),
                None => unknown_role(*role_id),
            })
            .collect()
    }
}

/// Placeholder shown for a role whose name could not be resolved.
pub fn unknown_role(role_id: RoleId) -> String {
    format!("Unknown ({})", role_id)
}
