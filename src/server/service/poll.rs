//! Poll engine.
//!
//! A poll is `Active` from creation until its ID is older than the retention
//! window, at which point eviction removes it and any interaction reports it as no
//! longer active. There is no other state.
//!
//! Clicks on the same poll are serialized: recording the click and editing every
//! copy of the poll with the new count run as one unit under a per-poll lock, so
//! copies are always rewritten in click order. Clicks on different polls proceed
//! independently.

use chrono::{DateTime, Duration, Utc};
use serenity::all::UserId;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

use crate::server::{
    data::poll::PollStore,
    error::{poll::PollError, AppError},
    model::{
        poll::{CreatePollParam, Poll, PollId},
        target::ResolvedTarget,
    },
    service::{
        fanout::{FanoutBroadcaster, FanoutReport},
        render::{format_clickers, PollRenderer, MAX_CLICKERS_CHARS},
        role::RoleNameResolver,
    },
};

/// Age after which a poll is evicted.
pub const POLL_RETENTION_DAYS: i64 = 7;

pub fn poll_retention() -> Duration {
    Duration::days(POLL_RETENTION_DAYS)
}

/// Result of a successful click.
#[derive(Debug, Clone)]
pub struct ClickOutcome {
    /// Poll state including the new click.
    pub poll: Poll,
    /// Outcome of rewriting every copy of the poll.
    pub edits: FanoutReport,
}

pub struct PollEngine {
    store: Arc<PollStore>,
    broadcaster: FanoutBroadcaster,
    roles: RoleNameResolver,
    locks: Mutex<HashMap<PollId, Arc<Mutex<()>>>>,
}

impl PollEngine {
    pub fn new(
        store: Arc<PollStore>,
        broadcaster: FanoutBroadcaster,
        roles: RoleNameResolver,
    ) -> Self {
        Self {
            store,
            broadcaster,
            roles,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a poll and broadcasts it to every target.
    ///
    /// Allocates a fresh ID and stores the poll before the first copy is sent, so
    /// a copy is clickable as soon as it appears. The poll's lock is held until
    /// every copy is sent and recorded: a click arriving mid-fanout waits, then
    /// updates all copies. The poll is kept even if no copy could be sent.
    ///
    /// # Arguments
    /// - `param` - Question, button label, ping mode and sender
    /// - `targets` - Destinations, normally every announce channel of every guild
    /// - `now` - Creation time embedded in the poll ID
    ///
    /// # Returns
    /// - `Ok((Poll, FanoutReport))` - Stored poll and per-target outcome
    /// - `Err(AppError)` - Poll could not be persisted
    pub async fn create_poll(
        &self,
        param: CreatePollParam,
        targets: &[ResolvedTarget],
        now: DateTime<Utc>,
    ) -> Result<(Poll, FanoutReport), AppError> {
        let id = self.store.allocate_id(now).await;

        let lock = self.poll_lock(&id).await;
        let _guard = lock.lock().await;

        let poll = Poll {
            id,
            question: param.question,
            button_label: param.button_label,
            sender_id: param.sender_id,
            no_ping: param.no_ping,
            clicked_users: Vec::new(),
            message_refs: Vec::new(),
        };
        self.store.create(&poll).await?;

        let report = {
            let renderer = PollRenderer {
                roles: &self.roles,
                poll: &poll,
            };
            self.broadcaster.send(targets, &renderer).await
        };

        let poll = self
            .store
            .set_message_refs(&poll.id, report.sent_refs.clone())
            .await?;

        tracing::info!(
            "Created poll {} from user {}: {} sent, {} failed",
            poll.id,
            poll.sender_id,
            report.successes,
            report.failures
        );

        Ok((poll, report))
    }

    /// Records a click by `user_id` and updates every copy of the poll.
    ///
    /// # Returns
    /// - `Ok(ClickOutcome)` - Click recorded and copies rewritten (edit failures
    ///   are counted in `edits`, not returned as errors)
    /// - `Err(AppError::PollErr(PollError::NotFound))` - Poll evicted or unknown
    /// - `Err(AppError::PollErr(PollError::AlreadyClicked))` - Repeat click, nothing changed
    /// - `Err(AppError)` - Click could not be persisted
    pub async fn register_click(
        &self,
        poll_id: &PollId,
        user_id: UserId,
    ) -> Result<ClickOutcome, AppError> {
        if self.store.get(poll_id).await.is_none() {
            return Err(PollError::NotFound(poll_id.to_string()).into());
        }

        let lock = self.poll_lock(poll_id).await;
        let _guard = lock.lock().await;

        let recorded = self.store.record_click(poll_id, user_id).await?;
        if recorded.already_clicked {
            return Err(PollError::AlreadyClicked {
                poll_id: poll_id.to_string(),
                user_id,
            }
            .into());
        }

        let poll = recorded.poll;
        let renderer = PollRenderer {
            roles: &self.roles,
            poll: &poll,
        };
        let edits = self.broadcaster.edit(&poll.message_refs, &renderer).await;

        tracing::info!(
            "User {} clicked poll {} ({} total), {} cop(ies) updated, {} failed",
            user_id,
            poll.id,
            poll.clicked_users.len(),
            edits.successes,
            edits.failures
        );

        Ok(ClickOutcome { poll, edits })
    }

    /// Lists who clicked a poll, without changing anything.
    ///
    /// # Returns
    /// - `Ok(String)` - Formatted list, capped in length
    /// - `Err(AppError::PollErr(PollError::NotFound))` - Poll evicted or unknown
    pub async fn show_clickers(&self, poll_id: &PollId) -> Result<String, AppError> {
        let poll = self
            .store
            .get(poll_id)
            .await
            .ok_or_else(|| PollError::NotFound(poll_id.to_string()))?;

        Ok(format_clickers(&poll.clicked_users, MAX_CLICKERS_CHARS))
    }

    /// Evicts every poll older than the retention window.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of polls removed
    /// - `Err(AppError)` - Eviction could not be persisted; nothing was removed
    pub async fn evict_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let evicted = self.store.evict_expired(now, poll_retention()).await?;

        if !evicted.is_empty() {
            let mut locks = self.locks.lock().await;
            for poll_id in &evicted {
                locks.remove(poll_id);
            }
            tracing::info!("Evicted {} expired poll(s)", evicted.len());
        }

        Ok(evicted.len())
    }

    /// Number of polls currently accepting clicks.
    pub async fn active_poll_count(&self) -> usize {
        self.store.list_all().await.len()
    }

    async fn poll_lock(&self, poll_id: &PollId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(poll_id.clone()).or_default().clone()
    }
}
