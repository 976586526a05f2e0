use chrono::Utc;
use std::{sync::Arc, time::Duration};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::poll::PollEngine};

/// Interval between two eviction passes.
const EVICTION_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Starts the poll eviction scheduler
///
/// Runs an eviction pass every 24 hours, removing polls older than the retention
/// window. The startup pass is run separately while building the bot state.
///
/// # Arguments
/// - `polls`: Poll engine owning the store
pub async fn start_scheduler(polls: Arc<PollEngine>) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(EVICTION_INTERVAL, move |_uuid, _lock| {
        let polls = polls.clone();

        Box::pin(async move {
            if let Err(e) = polls.evict_expired(Utc::now()).await {
                tracing::error!("Error evicting expired polls: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Poll eviction scheduler started");

    Ok(scheduler)
}
