//! Paced fanout of sends and edits.
//!
//! A fanout pass works through its targets strictly in order, one remote call at a
//! time, and waits a fixed interval after each call before issuing the next. A
//! pass over N targets therefore takes at least N × interval. Without the pacing
//! the Discord transport starts throttling and silently dropping messages.
//!
//! A failing target is logged and counted, and the pass moves on: one missing
//! channel or permission error never prevents the remaining targets from being
//! attempted. There is no abort path once a pass has started.

use serenity::all::ChannelId;
use std::{collections::HashSet, collections::VecDeque, sync::Arc, time::Duration};

use crate::server::{
    model::{poll::MessageRef, target::ResolvedTarget},
    service::{render::Render, transport::MessageTransport},
};

/// Queue of operations drained no faster than one per `interval`.
///
/// Every item handed out is followed by a wait of `interval` before the next call
/// to [`PacedQueue::next`] returns, including the call that finds the queue empty.
pub struct PacedQueue<T> {
    items: VecDeque<T>,
    interval: Duration,
    started: bool,
}

impl<T> PacedQueue<T> {
    pub fn new(items: impl IntoIterator<Item = T>, interval: Duration) -> Self {
        Self {
            items: items.into_iter().collect(),
            interval,
            started: false,
        }
    }

    /// Waits out the interval after the previous item, then yields the next one.
    pub async fn next(&mut self) -> Option<T> {
        if self.started && !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }

        let item = self.items.pop_front();
        self.started = item.is_some();
        item
    }
}

/// Outcome of one fanout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanoutReport {
    pub successes: usize,
    pub failures: usize,
    /// Messages sent (or edited) successfully, in pass order.
    pub sent_refs: Vec<MessageRef>,
    /// Channels where the send or edit failed, in pass order.
    pub failed_channels: Vec<ChannelId>,
}

impl FanoutReport {
    /// Number of channels the pass tried to reach.
    pub fn attempted(&self) -> usize {
        self.successes + self.failures
    }

    /// Short summary shown to the user who started the pass.
    pub fn summary(&self) -> String {
        if self.failures == 0 {
            format!("✅ Sent to {} channel(s).", self.successes)
        } else {
            let failed = self
                .failed_channels
                .iter()
                .map(|channel_id| format!("<#{}>", channel_id))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "⚠️ Sent to {} channel(s), {} failed: {}",
                self.successes, self.failures, failed
            )
        }
    }
}

/// Sends or edits one message per target with fixed pacing.
#[derive(Clone)]
pub struct FanoutBroadcaster {
    transport: Arc<dyn MessageTransport>,
    send_delay: Duration,
}

impl FanoutBroadcaster {
    pub fn new(transport: Arc<dyn MessageTransport>, send_delay: Duration) -> Self {
        Self {
            transport,
            send_delay,
        }
    }

    /// Sends a freshly rendered message to each target, in order.
    ///
    /// A channel that appears more than once in `targets` is only sent to the
    /// first time.
    ///
    /// # Arguments
    /// - `targets` - Destinations, in send order
    /// - `renderer` - Builds the message for each target
    ///
    /// # Returns
    /// - `FanoutReport` - Per-target outcome with a reference to each sent message
    pub async fn send(&self, targets: &[ResolvedTarget], renderer: &dyn Render) -> FanoutReport {
        let mut report = FanoutReport::default();

        if targets.is_empty() {
            tracing::warn!("Fanout has no target, nothing sent");
            return report;
        }

        let mut seen: HashSet<ChannelId> = HashSet::new();
        let unique = targets.iter().filter(|target| seen.insert(target.channel_id));
        let mut queue = PacedQueue::new(unique, self.send_delay);

        while let Some(target) = queue.next().await {
            let message = renderer.render(target).await;

            match self
                .transport
                .send_message(target.channel_id, &message)
                .await
            {
                Ok(message_id) => {
                    report.successes += 1;
                    report
                        .sent_refs
                        .push(MessageRef::from_target(target, message_id));
                    tracing::debug!(
                        "Sent message {} to channel {} in guild {}",
                        message_id,
                        target.channel_id,
                        target.guild_id
                    );
                }
                Err(e) => {
                    report.failures += 1;
                    report.failed_channels.push(target.channel_id);
                    tracing::error!(
                        "Failed to send message to channel {} in guild {}: {}",
                        target.channel_id,
                        target.guild_id,
                        e
                    );
                    // Continue sending to other channels even if one fails
                }
            }
        }

        tracing::info!(
            "Fanout finished: {} sent, {} failed",
            report.successes,
            report.failures
        );

        report
    }

    /// Re-renders and edits each previously sent message, in stored order.
    ///
    /// # Returns
    /// - `FanoutReport` - Per-message outcome; `sent_refs` holds the edited references
    pub async fn edit(&self, message_refs: &[MessageRef], renderer: &dyn Render) -> FanoutReport {
        let mut report = FanoutReport::default();
        let mut queue = PacedQueue::new(message_refs, self.send_delay);

        while let Some(message_ref) = queue.next().await {
            let message = renderer.render(&message_ref.target()).await;

            match self
                .transport
                .edit_message(message_ref.channel_id, message_ref.message_id, &message)
                .await
            {
                Ok(()) => {
                    report.successes += 1;
                    report.sent_refs.push(message_ref.clone());
                }
                Err(e) => {
                    report.failures += 1;
                    report.failed_channels.push(message_ref.channel_id);
                    tracing::error!(
                        "Failed to edit message {} in channel {}: {}",
                        message_ref.message_id,
                        message_ref.channel_id,
                        e
                    );
                    // Continue updating other messages even if one fails
                }
            }
        }

        report
    }
}
