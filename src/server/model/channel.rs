//! Channel target document schema.
//!
//! The channel document groups channel configurations by guild and then by
//! category:
//!
//! ```json
//! { "123": { "announce": [ { "id": "456", "pingRoleIds": ["789"] } ] } }
//! ```

use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, RoleId};
use std::collections::BTreeMap;

/// One configured channel within a guild category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelConfig {
    /// Discord channel the broadcast is sent to.
    pub id: ChannelId,
    /// Roles mentioned in this channel, in configured order.
    #[serde(default)]
    pub ping_role_ids: Vec<RoleId>,
}

/// Category name to the channels configured for it.
pub type CategoryChannels = BTreeMap<String, Vec<ChannelConfig>>;

/// Full channel document keyed by guild ID string.
///
/// Guild keys are kept as strings so a single malformed key can be skipped during
/// resolution instead of invalidating the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelDocument {
    pub guilds: BTreeMap<String, CategoryChannels>,
}
