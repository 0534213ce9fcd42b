use crate::errors::Result;
use crate::services::market_update::MarketUpdateJob;
use log::{debug, error, info};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

/// 17:00 on weekdays, evaluated in the configured market time zone.
pub const SCHEDULE: &str = "0 0 17 * * Mon-Fri";

/// Register the market update with `scheduler`.
pub async fn register(job: Arc<MarketUpdateJob>, scheduler: &JobScheduler) -> Result<()> {
    let tz = job.config().market_timezone;

    let cron_job = Job::new_async_tz(SCHEDULE, tz, move |_uuid, _lock| {
        let job = job.clone();

        Box::pin(async move {
            match job.run().await {
                Ok(report) => debug!("Scheduled market update completed: {:?}", report),
                Err(e) => error!("Scheduled market update failed: {}", e),
            }
        })
    })?;

    scheduler.add(cron_job).await?;

    info!("Market update registered ({} {})", SCHEDULE, tz);
    Ok(())
}

/// Start the scheduler and block until Ctrl-C.
pub async fn run_until_shutdown(job: Arc<MarketUpdateJob>) -> Result<()> {
    let mut scheduler = JobScheduler::new().await?;
    register(job, &scheduler).await?;
    scheduler.start().await?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested, stopping scheduler");
    scheduler.shutdown().await?;

    Ok(())
}
