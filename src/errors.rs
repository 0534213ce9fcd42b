use thiserror::Error;

#[derive(Error, Debug)]
pub enum StonksError {
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(&'static str),

    #[error("Upstream fetch failed for {symbol}: {reason}")]
    UpstreamFetchFailed { symbol: String, reason: String },

    #[error("Notification delivery failed: {0}")]
    NotificationDeliveryFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Scheduler error: {0}")]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

pub type Result<T> = std::result::Result<T, StonksError>;

impl StonksError {
    /// Wraps any lower-level failure as a fetch failure for `symbol`.
    pub fn upstream(symbol: &str, reason: impl ToString) -> Self {
        StonksError::UpstreamFetchFailed {
            symbol: symbol.to_string(),
            reason: reason.to_string(),
        }
    }
}
