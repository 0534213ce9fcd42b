use crate::config::Config;
use crate::errors::{Result, StonksError};
use crate::models::series::{DailySeriesResponse, SymbolSeries};
use crate::sources::base::QuoteSource;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Alpha Vantage `TIME_SERIES_DAILY` client
pub struct AlphaVantageSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageSource {
    fn provider_name(&self) -> &'static str {
        "alphavantage"
    }

    async fn fetch_daily_series(&self, symbol: &str) -> Result<SymbolSeries> {
        debug!("Requesting daily series for {}", symbol);

        let response = self.client
            .get(format!("{}/query", self.base_url))
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol),
                ("outputsize", "compact"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| StonksError::upstream(symbol, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(StonksError::upstream(
                symbol,
                format!("Got {} from {}.", status.as_u16(), self.provider_name()),
            ));
        }

        let text = response.text().await.map_err(|e| StonksError::upstream(symbol, e))?;
        let parsed: DailySeriesResponse =
            serde_json::from_str(&text).map_err(|e| StonksError::upstream(symbol, e))?;

        let series = parsed.into_series(symbol)?;
        debug!("Got {} daily entries for {}", series.len(), symbol);

        Ok(series)
    }
}
