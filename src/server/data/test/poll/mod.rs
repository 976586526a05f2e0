use chrono::{DateTime, Duration, TimeZone, Utc};
use serenity::all::{ChannelId, GuildId, MessageId, UserId};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory};

use super::MemoryBackend;
use crate::server::{
    data::{
        backend::{JsonFileBackend, PollBackend},
        poll::PollStore,
    },
    error::{poll::PollError, AppError},
    model::poll::{MessageRef, Poll, PollDocument, PollId},
};

mod create;
mod evict_expired;
mod file_backend;
mod open;
mod record_click;
mod set_message_refs;

fn creation_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn retention() -> Duration {
    Duration::days(7)
}

/// Poll with one live copy and no clicks.
fn sample_poll(id: PollId) -> Poll {
    Poll {
        id,
        question: "Who is in?".to_string(),
        button_label: "Yes".to_string(),
        sender_id: UserId::new(42),
        no_ping: false,
        clicked_users: Vec::new(),
        message_refs: vec![MessageRef {
            guild_id: GuildId::new(1),
            channel_id: ChannelId::new(10),
            message_id: MessageId::new(100),
            ping_role_ids: Vec::new(),
        }],
    }
}

/// Opens a store over a fresh in-memory backend and inserts one sample poll.
async fn store_with_poll() -> (Arc<MemoryBackend>, PollStore, PollId) {
    let backend = Arc::new(MemoryBackend::default());
    let store = PollStore::open(backend.clone()).await;
    let id = store.allocate_id(creation_time()).await;
    store.create(&sample_poll(id.clone())).await.unwrap();
    (backend, store, id)
}
