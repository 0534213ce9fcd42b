use chrono_tz::Tz;
use log::error;

use crate::errors::{Result, StonksError};

pub const WEBHOOK_URL_VAR: &str = "DISCORD_URL";
pub const API_KEY_VAR: &str = "API_KEY";

pub const DEFAULT_SYMBOLS: [&str; 8] = ["GME", "AMC", "DJT", "TSLA", "NVDA", "SPY", "GLD", "SLV"];
pub const DEFAULT_API_BASE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_MARKET_TIMEZONE: Tz = chrono_tz::America::New_York;

#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub api_key: String,
    pub symbols: Vec<String>,
    pub market_timezone: Tz,
    pub api_base_url: String,
}

impl Config {
    /// Reads the webhook URL and API key from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = required(&lookup, WEBHOOK_URL_VAR)?;
        let api_key = required(&lookup, API_KEY_VAR)?;

        Ok(Self {
            webhook_url,
            api_key,
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            market_timezone: DEFAULT_MARKET_TIMEZONE,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        })
    }

    pub fn with_symbols(mut self, symbols: &[&str]) -> Self {
        self.symbols = symbols.iter().map(|s| s.to_uppercase()).collect();
        self
    }

    pub fn with_market_timezone(mut self, tz: Tz) -> Self {
        self.market_timezone = tz;
        self
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            error!("{} not found.", key);
            Err(StonksError::ConfigurationMissing(key))
        }
    }
}
