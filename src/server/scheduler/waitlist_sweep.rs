//! Cron job that purges stale waitlist entries.
//!
//! Runs at the top of every minute and deletes entries that never checked in within the
//! retention window. A tick that fires while the previous one still holds the sweep lock
//! is skipped rather than queued.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::waitlist::WaitlistService};

/// Fires at second zero of every minute.
const SWEEP_SCHEDULE: &str = "0 * * * * *";

/// Result of a single sweep tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// The sweep ran and removed this many entries.
    Completed(u64),
    /// A previous tick was still running, so this one did nothing.
    Skipped,
    /// The bulk delete failed; the next tick retries.
    Failed,
}

/// Starts the waitlist expiry scheduler
///
/// Once per minute, removes waitlist entries that were created more than the
/// retention window ago and never checked in. Ticks never overlap: if one is still
/// running when the next fires, the new tick is skipped.
///
/// The returned scheduler must be kept alive and shut down on exit.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let running = Arc::new(Mutex::new(()));

    let job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let running = running.clone();

        Box::pin(async move {
            run_sweep(&db, &running, Utc::now()).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Waitlist sweep scheduler started");

    Ok(scheduler)
}

/// Runs one sweep tick unless another tick holds `running`.
pub async fn run_sweep(
    db: &DatabaseConnection,
    running: &Mutex<()>,
    now: DateTime<Utc>,
) -> SweepOutcome {
    let Ok(_guard) = running.try_lock() else {
        tracing::warn!("Previous waitlist sweep still running, skipping this tick");
        return SweepOutcome::Skipped;
    };

    match WaitlistService::new(db).sweep_expired(now).await {
        Ok(0) => {
            tracing::debug!("Waitlist sweep removed no entries");
            SweepOutcome::Completed(0)
        }
        Ok(removed) => {
            tracing::info!("Waitlist sweep removed {} expired entries", removed);
            SweepOutcome::Completed(removed)
        }
        Err(e) => {
            tracing::error!("Error sweeping expired waitlist entries: {}", e);
            SweepOutcome::Failed
        }
    }
}
