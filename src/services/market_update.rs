use crate::config::Config;
use crate::errors::{Result, StonksError};
use crate::models::change::ChangeResult;
use crate::models::message::{Embed, NotificationMessage, MARKET_UPDATE_TITLE};
use crate::notifiers::base::Notifier;
use crate::sources::base::QuoteSource;
use crate::util;
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use std::sync::Arc;

/// Outcome of one firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub fields: usize,
    pub tally: i32,
    pub market_closed: bool,
    pub delivered: bool,
}

/// Fetches every configured symbol, builds the summary and sends it once.
pub struct MarketUpdateJob {
    config: Config,
    source: Arc<dyn QuoteSource + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
}

impl MarketUpdateJob {
    pub fn new(
        config: Config,
        source: Arc<dyn QuoteSource + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            source,
            notifier,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run(&self) -> Result<RunReport> {
        self.run_at(Utc::now()).await
    }

    /// Runs the cycle as if the current instant were `now`.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunReport> {
        info!(
            "Market update for {} symbols via {}",
            self.config.symbols.len(),
            self.source.provider_name()
        );

        let (message, tally, fields) = match self.build_message(now).await {
            Ok(built) => built,
            Err(e) => {
                error!("Market update aborted: {}", e);
                return Err(e);
            }
        };

        let market_closed = fields == 0;
        let delivered = match self.notifier.send(&message).await {
            Ok(()) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        };

        let report = RunReport {
            fields,
            tally,
            market_closed,
            delivered,
        };
        info!(
            "Market update finished: {} field(s), tally {}, closed {}, delivered {}",
            report.fields, report.tally, report.market_closed, report.delivered
        );
        Ok(report)
    }

    /// Returns the message plus the tally and the number of symbol fields.
    async fn build_message(&self, now: DateTime<Utc>) -> Result<(NotificationMessage, i32, usize)> {
        let mut embed = Embed::new(MARKET_UPDATE_TITLE);
        let mut tally = 0;

        for symbol in &self.config.symbols {
            let change = match self.symbol_change(symbol, &now).await? {
                Some(change) => change,
                None => continue,
            };

            tally += change.direction.tally();
            embed.push_field(symbol, &change.describe());
        }

        let fields = embed.fields.len();
        if fields == 0 {
            embed.mark_closed();
        } else {
            embed.color_for_tally(tally);
        }

        Ok((NotificationMessage::single(embed), tally, fields))
    }

    /// `None` when the symbol has no entry for today's exchange-local date.
    async fn symbol_change(
        &self,
        symbol: &str,
        now: &DateTime<Utc>,
    ) -> Result<Option<ChangeResult>> {
        let series = self.source.fetch_daily_series(symbol).await?;

        let tz = series.time_zone.unwrap_or(self.config.market_timezone);
        let today = util::local_date(now, &tz);

        let mut latest = series.latest();
        let (latest_date, today_price) = match latest.next() {
            Some(entry) => entry,
            None => return Err(StonksError::upstream(symbol, "daily series is empty")),
        };

        info!(
            "{}: today's date is {}. Last entry in series is {}",
            symbol,
            util::format_date(&today),
            util::format_date(latest_date)
        );

        if *latest_date != today {
            warn!("{}: no entry for today, treating market as closed", symbol);
            return Ok(None);
        }

        let (_, yesterday_price) = latest
            .next()
            .ok_or_else(|| StonksError::upstream(symbol, "no previous close in series"))?;

        ChangeResult::compute(symbol, yesterday_price.close, today_price.close).map(Some)
    }
}
