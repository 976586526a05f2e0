//! Factories for allow-list entries.

use serde_json::{json, Value};

/// Creates one allow-list entry.
///
/// # Arguments
/// - `user_id` - Discord user ID
/// - `display_name` - Optional name shown by the user listing
pub fn allowed_user(user_id: u64, display_name: Option<&str>) -> Value {
    match display_name {
        Some(name) => json!({ "id": user_id.to_string(), "displayName": name }),
        None => json!({ "id": user_id.to_string() }),
    }
}

/// Creates an allow-list document with one unnamed entry per ID.
pub fn create_allow_list(user_ids: &[u64]) -> Value {
    Value::Array(
        user_ids
            .iter()
            .map(|user_id| allowed_user(*user_id, None))
            .collect(),
    )
}
