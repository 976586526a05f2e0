//! Poll store.
//!
//! The store exclusively owns the in-memory poll table and its persisted mirror.
//! Every mutation is applied to a copy of the table, written through the backend,
//! and only then swapped in, so a caller is never told a mutation succeeded before
//! it is durable and memory never runs ahead of disk.

use chrono::{DateTime, Duration, Utc};
use serenity::all::UserId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::{
    data::backend::PollBackend,
    error::{poll::PollError, AppError},
    model::poll::{MessageRef, Poll, PollDocument, PollId},
};

/// Outcome of [`PollStore::record_click`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedClick {
    /// The user had already clicked; nothing was changed.
    pub already_clicked: bool,
    /// Poll state after the operation.
    pub poll: Poll,
}

pub struct PollStore {
    backend: Arc<dyn PollBackend>,
    document: RwLock<PollDocument>,
}

impl PollStore {
    /// Opens the store, loading whatever the backend has persisted.
    ///
    /// A missing document is a fresh start. An unreadable or corrupt document is
    /// logged and replaced by an empty table: data loss is accepted over refusing
    /// to start.
    ///
    /// # Arguments
    /// - `backend` - Persistence backend the store writes through
    ///
    /// # Returns
    /// - `PollStore` - Store holding the loaded (or empty) poll table
    pub async fn open(backend: Arc<dyn PollBackend>) -> Self {
        let document = match backend.load().await {
            Ok(Some(document)) => {
                tracing::info!(
                    "Loaded {} poll(s) from store (counter {})",
                    document.polls.len(),
                    document.poll_counter
                );
                document
            }
            Ok(None) => {
                tracing::info!("No poll store found, starting with an empty table");
                PollDocument::default()
            }
            Err(e) => {
                tracing::error!("Poll store is unreadable, starting with an empty table: {}", e);
                PollDocument::default()
            }
        };

        Self {
            backend,
            document: RwLock::new(document),
        }
    }

    /// Hands out the next poll ID.
    ///
    /// Increments the monotonic counter. The new counter value is persisted with
    /// the next mutation (normally the `create` of the poll using this ID).
    ///
    /// # Arguments
    /// - `now` - Creation time embedded in the ID
    pub async fn allocate_id(&self, now: DateTime<Utc>) -> PollId {
        let mut document = self.document.write().await;
        document.poll_counter += 1;
        PollId::new(document.poll_counter, now)
    }

    /// Inserts a poll and persists the table.
    ///
    /// # Returns
    /// - `Ok(())` - Poll stored and written to the backend
    /// - `Err(AppError)` - Write failed; the poll is not stored
    pub async fn create(&self, poll: &Poll) -> Result<(), AppError> {
        let mut document = self.document.write().await;

        let mut updated = document.clone();
        updated
            .polls
            .insert(poll.id.as_str().to_string(), poll.to_record());

        self.backend.save(&updated).await?;
        *document = updated;

        Ok(())
    }

    /// Records the copies of a poll that were sent and persists the table.
    ///
    /// # Returns
    /// - `Ok(Poll)` - Poll state with `message_refs` replaced
    /// - `Err(AppError::PollErr(PollError::NotFound))` - No such poll
    /// - `Err(AppError)` - Write failed; the references are not stored
    pub async fn set_message_refs(
        &self,
        poll_id: &PollId,
        message_refs: Vec<MessageRef>,
    ) -> Result<Poll, AppError> {
        let mut document = self.document.write().await;

        let mut updated = document.clone();
        let record = updated
            .polls
            .get_mut(poll_id.as_str())
            .ok_or_else(|| PollError::NotFound(poll_id.to_string()))?;
        record.message_refs = message_refs;
        let poll = Poll::from_record(poll_id.clone(), record.clone());

        self.backend.save(&updated).await?;
        *document = updated;

        Ok(poll)
    }

    /// Adds `user_id` to the poll's clickers and persists the table.
    ///
    /// A repeat click changes nothing and is reported through
    /// `RecordedClick::already_clicked`.
    ///
    /// # Returns
    /// - `Ok(RecordedClick)` - Click recorded (or already present)
    /// - `Err(AppError::PollErr(PollError::NotFound))` - No such poll
    /// - `Err(AppError)` - Write failed; the click is not recorded
    pub async fn record_click(
        &self,
        poll_id: &PollId,
        user_id: UserId,
    ) -> Result<RecordedClick, AppError> {
        let mut document = self.document.write().await;

        let Some(record) = document.polls.get(poll_id.as_str()) else {
            return Err(PollError::NotFound(poll_id.to_string()).into());
        };

        if record.clicked_users.contains(&user_id) {
            return Ok(RecordedClick {
                already_clicked: true,
                poll: Poll::from_record(poll_id.clone(), record.clone()),
            });
        }

        let mut updated = document.clone();
        let record = updated
            .polls
            .get_mut(poll_id.as_str())
            .ok_or_else(|| PollError::NotFound(poll_id.to_string()))?;
        record.clicked_users.push(user_id);
        let poll = Poll::from_record(poll_id.clone(), record.clone());

        self.backend.save(&updated).await?;
        *document = updated;

        Ok(RecordedClick {
            already_clicked: false,
            poll,
        })
    }

    pub async fn get(&self, poll_id: &PollId) -> Option<Poll> {
        let document = self.document.read().await;
        document
            .polls
            .get(poll_id.as_str())
            .map(|record| Poll::from_record(poll_id.clone(), record.clone()))
    }

    pub async fn list_all(&self) -> Vec<Poll> {
        let document = self.document.read().await;
        document
            .polls
            .iter()
            .map(|(id, record)| Poll::from_record(PollId::from(id.as_str()), record.clone()))
            .collect()
    }

    /// Removes every poll older than `retention` and persists the table.
    ///
    /// Age comes from the timestamp embedded in the poll ID; polls whose ID cannot
    /// be parsed are kept. Nothing is written when no poll expired.
    ///
    /// # Returns
    /// - `Ok(Vec<PollId>)` - IDs of the removed polls
    /// - `Err(AppError)` - Write failed; no poll was removed
    pub async fn evict_expired(
        &self,
        now: DateTime<Utc>,
        retention: Duration,
    ) -> Result<Vec<PollId>, AppError> {
        let mut document = self.document.write().await;

        let expired: Vec<PollId> = document
            .polls
            .keys()
            .map(|id| PollId::from(id.as_str()))
            .filter(|id| id.is_expired(now, retention))
            .collect();

        if expired.is_empty() {
            return Ok(expired);
        }

        let mut updated = document.clone();
        for id in &expired {
            updated.polls.remove(id.as_str());
        }

        self.backend.save(&updated).await?;
        *document = updated;

        Ok(expired)
    }

    /// Copy of the full table, as it would be persisted.
    #[cfg(test)]
    pub async fn snapshot(&self) -> PollDocument {
        self.document.read().await.clone()
    }
}
