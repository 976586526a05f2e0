//! Allow-list entries.

use serde::{Deserialize, Serialize};
use serenity::all::UserId;

/// One operator allowed to invoke broadcast commands.
///
/// Deserialized from the allow-list document, which is read-only at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedUser {
    /// Discord user ID.
    pub id: UserId,
    /// Optional human-readable name shown by the `users` command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
