//! Factory for channel target documents.

use serde_json::{json, Map, Value};

/// Builder for a channel target document.
///
/// Channels are appended to their guild's category in call order, so adding the
/// same channel twice produces a duplicate entry like a hand-edited document would.
///
/// # Example
///
/// ```rust,ignore
/// let channels = ChannelDocumentFactory::new()
///     .channel(1, "announce", 10, &[100])
///     .raw_guild("not-a-guild", json!({}))
///     .build();
/// ```
#[derive(Default)]
pub struct ChannelDocumentFactory {
    guilds: Map<String, Value>,
}

impl ChannelDocumentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a channel to `category` in `guild_id`.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the channel belongs to
    /// - `category` - Category key, stored as given
    /// - `channel_id` - Discord channel ID
    /// - `ping_role_ids` - Roles pinged in this channel, in order
    pub fn channel(
        mut self,
        guild_id: u64,
        category: &str,
        channel_id: u64,
        ping_role_ids: &[u64],
    ) -> Self {
        let entry = json!({
            "id": channel_id.to_string(),
            "pingRoleIds": ping_role_ids.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
        });

        let guild = self
            .guilds
            .entry(guild_id.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(categories) = guild {
            let channels = categories
                .entry(category.to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(channels) = channels {
                channels.push(entry);
            }
        }

        self
    }

    /// Inserts a guild entry verbatim, for example under a malformed key.
    pub fn raw_guild(mut self, key: &str, categories: Value) -> Self {
        self.guilds.insert(key.to_string(), categories);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.guilds)
    }
}
