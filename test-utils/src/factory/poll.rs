//! Factories for poll records and poll store documents.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use crate::factory::helpers::next_id;

/// Builds the ID of a poll allocated with `counter` at `created_at`.
pub fn poll_id(counter: u64, created_at: DateTime<Utc>) -> String {
    format!("poll_{}_{}", counter, created_at.timestamp_millis())
}

/// Builder for one persisted poll record.
///
/// Defaults: question "Who is in?", button label "Yes", created now, no clicks,
/// no message copies, pinging enabled.
pub struct PollRecordFactory {
    counter: u64,
    created_at: DateTime<Utc>,
    question: String,
    button_label: String,
    sender_id: u64,
    no_ping: bool,
    clicked_users: Vec<u64>,
    message_refs: Vec<Value>,
}

impl PollRecordFactory {
    /// Creates a record whose ID embeds `counter`.
    pub fn new(counter: u64) -> Self {
        Self {
            counter,
            created_at: Utc::now(),
            question: "Who is in?".to_string(),
            button_label: "Yes".to_string(),
            sender_id: next_id(),
            no_ping: false,
            clicked_users: Vec::new(),
            message_refs: Vec::new(),
        }
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn question(mut self, question: &str) -> Self {
        self.question = question.to_string();
        self
    }

    pub fn button_label(mut self, button_label: &str) -> Self {
        self.button_label = button_label.to_string();
        self
    }

    pub fn sender(mut self, sender_id: u64) -> Self {
        self.sender_id = sender_id;
        self
    }

    pub fn no_ping(mut self, no_ping: bool) -> Self {
        self.no_ping = no_ping;
        self
    }

    pub fn clicked(mut self, user_ids: &[u64]) -> Self {
        self.clicked_users = user_ids.to_vec();
        self
    }

    /// Adds a live copy of the poll.
    pub fn message_ref(
        mut self,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
        ping_role_ids: &[u64],
    ) -> Self {
        self.message_refs.push(json!({
            "guildId": guild_id.to_string(),
            "channelId": channel_id.to_string(),
            "messageId": message_id.to_string(),
            "pingRoleIds": ping_role_ids.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
        }));
        self
    }

    pub fn id(&self) -> String {
        poll_id(self.counter, self.created_at)
    }

    /// Returns the poll ID and its record.
    pub fn build(self) -> (String, Value) {
        let id = self.id();
        let record = json!({
            "question": self.question,
            "buttonLabel": self.button_label,
            "senderId": self.sender_id.to_string(),
            "noPing": self.no_ping,
            "clickedUsers": self.clicked_users.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
            "messageRefs": self.message_refs,
        });

        (id, record)
    }
}

/// Builder for a whole poll store document.
///
/// The counter defaults to the highest counter among the added polls.
#[derive(Default)]
pub struct PollDocumentFactory {
    counter: Option<u64>,
    max_counter: u64,
    polls: Map<String, Value>,
}

impl PollDocumentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter(mut self, counter: u64) -> Self {
        self.counter = Some(counter);
        self
    }

    pub fn poll(mut self, poll: PollRecordFactory) -> Self {
        self.max_counter = self.max_counter.max(poll.counter);
        let (id, record) = poll.build();
        self.polls.insert(id, record);
        self
    }

    pub fn build(self) -> Value {
        json!({
            "pollCounter": self.counter.unwrap_or(self.max_counter),
            "polls": self.polls,
        })
    }
}
