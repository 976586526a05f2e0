//! Poll domain model and persisted poll document.
//!
//! A poll's ID has the form `poll_<counter>_<creation epoch millis>`. The embedded
//! timestamp is the only record of when the poll was created and drives
//! time-based eviction, so the format is part of the persisted contract.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, GuildId, MessageId, RoleId, UserId};
use std::{collections::BTreeMap, fmt};

use crate::server::model::{command::POLL_ID_PREFIX, target::ResolvedTarget};

/// Poll identifier.
///
/// Wraps the raw string so IDs loaded from disk that do not follow the expected
/// format are still addressable; they are just never evicted by age.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollId(String);

impl PollId {
    /// Builds the ID for the poll allocated with `counter` at `created_at`.
    pub fn new(counter: u64, created_at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}{}_{}",
            POLL_ID_PREFIX,
            counter,
            created_at.timestamp_millis()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creation time embedded in the ID.
    ///
    /// # Returns
    /// - `Some(DateTime<Utc>)` - ID follows `poll_<counter>_<millis>`
    /// - `None` - ID is malformed
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let rest = self.0.strip_prefix(POLL_ID_PREFIX)?;
        let (counter, millis) = rest.split_once('_')?;
        counter.parse::<u64>().ok()?;
        DateTime::from_timestamp_millis(millis.parse::<i64>().ok()?)
    }

    /// Whether the poll is older than `retention` at `now`.
    ///
    /// Malformed IDs are never expired.
    pub fn is_expired(&self, now: DateTime<Utc>, retention: Duration) -> bool {
        self.created_at()
            .map(|created_at| now - created_at > retention)
            .unwrap_or(false)
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PollId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PollId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Location of one live copy of a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRef {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    #[serde(default)]
    pub ping_role_ids: Vec<RoleId>,
}

impl MessageRef {
    /// Records the message sent to `target`.
    pub fn from_target(target: &ResolvedTarget, message_id: MessageId) -> Self {
        Self {
            guild_id: target.guild_id,
            channel_id: target.channel_id,
            message_id,
            ping_role_ids: target.ping_role_ids.clone(),
        }
    }

    /// The target this copy was sent to, used to re-render it on edit.
    pub fn target(&self) -> ResolvedTarget {
        ResolvedTarget {
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            ping_role_ids: self.ping_role_ids.clone(),
        }
    }
}

/// Poll with its ID, as used by the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: PollId,
    pub question: String,
    pub button_label: String,
    pub sender_id: UserId,
    /// Fixed at creation: every rendering of this poll uses role names instead of mentions.
    pub no_ping: bool,
    /// Users who clicked, in click order. Never contains duplicates.
    pub clicked_users: Vec<UserId>,
    /// One entry per channel the poll reached, in broadcast order.
    pub message_refs: Vec<MessageRef>,
}

impl Poll {
    /// Converts a persisted record to a poll at the data-layer boundary.
    pub fn from_record(id: PollId, record: PollRecord) -> Self {
        Self {
            id,
            question: record.question,
            button_label: record.button_label,
            sender_id: record.sender_id,
            no_ping: record.no_ping,
            clicked_users: record.clicked_users,
            message_refs: record.message_refs,
        }
    }

    pub fn to_record(&self) -> PollRecord {
        PollRecord {
            question: self.question.clone(),
            button_label: self.button_label.clone(),
            sender_id: self.sender_id,
            no_ping: self.no_ping,
            clicked_users: self.clicked_users.clone(),
            message_refs: self.message_refs.clone(),
        }
    }
}

/// Parameters for creating a new poll.
#[derive(Debug, Clone)]
pub struct CreatePollParam {
    pub question: String,
    pub button_label: String,
    pub no_ping: bool,
    pub sender_id: UserId,
}

/// Persisted form of a poll, keyed by ID inside [`PollDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollRecord {
    pub question: String,
    pub button_label: String,
    pub sender_id: UserId,
    #[serde(default)]
    pub no_ping: bool,
    #[serde(default)]
    pub clicked_users: Vec<UserId>,
    #[serde(default)]
    pub message_refs: Vec<MessageRef>,
}

/// The whole poll store as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollDocument {
    /// Last counter value handed out; the next poll uses `poll_counter + 1`.
    #[serde(default)]
    pub poll_counter: u64,
    #[serde(default)]
    pub polls: BTreeMap<String, PollRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a generated ID embeds the counter and creation millis.
    ///
    /// Expected: `poll_<counter>_<millis>` whose timestamp parses back
    #[test]
    fn id_embeds_creation_time() {
        let created_at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let id = PollId::new(7, created_at);
        assert_eq!(id.as_str(), "poll_7_1700000000123");
        assert_eq!(id.created_at(), Some(created_at));
    }

    /// Tests that malformed IDs have no creation time and never expire.
    ///
    /// Expected: None for every malformed shape, is_expired false
    #[test]
    fn malformed_ids_never_expire() {
        let now = Utc::now();
        for raw in ["poll_x_123", "poll_1", "vote_1_123", "poll_1_abc", ""] {
            let id = PollId::from(raw);
            assert_eq!(id.created_at(), None, "{raw}");
            assert!(!id.is_expired(now, Duration::days(7)), "{raw}");
        }
    }

    /// Tests expiry against the retention window boundary.
    ///
    /// Expected: older than the window is expired, inside it is not
    #[test]
    fn expiry_uses_retention_window() {
        let now = Utc::now();
        let old = PollId::new(1, now - Duration::days(8));
        let fresh = PollId::new(2, now - Duration::days(6));
        assert!(old.is_expired(now, Duration::days(7)));
        assert!(!fresh.is_expired(now, Duration::days(7)));
    }

    /// Tests the persisted document field names.
    ///
    /// Expected: camelCase keys with snowflakes serialized as strings
    #[test]
    fn document_uses_camel_case_fields() {
        let mut document = PollDocument {
            poll_counter: 1,
            ..Default::default()
        };
        document.polls.insert(
            "poll_1_1".to_string(),
            PollRecord {
                question: "Ready?".to_string(),
                button_label: "Yes".to_string(),
                sender_id: UserId::new(10),
                no_ping: true,
                clicked_users: vec![UserId::new(11)],
                message_refs: vec![MessageRef {
                    guild_id: GuildId::new(1),
                    channel_id: ChannelId::new(2),
                    message_id: MessageId::new(3),
                    ping_role_ids: vec![RoleId::new(4)],
                }],
            },
        );

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["pollCounter"], 1);
        let poll = &value["polls"]["poll_1_1"];
        assert_eq!(poll["buttonLabel"], "Yes");
        assert_eq!(poll["noPing"], true);
        assert_eq!(poll["clickedUsers"][0], "11");
        assert_eq!(poll["messageRefs"][0]["pingRoleIds"][0], "4");
    }
}
