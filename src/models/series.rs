use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{Result, StonksError};

/// One trading day for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrice {
    #[serde(rename = "1. open")]
    pub open: Decimal,
    #[serde(rename = "2. high")]
    pub high: Decimal,
    #[serde(rename = "3. low")]
    pub low: Decimal,
    #[serde(rename = "4. close")]
    pub close: Decimal,
    #[serde(rename = "5. volume", deserialize_with = "volume_from_str")]
    pub volume: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    #[serde(rename = "1. Information")]
    pub information: Option<String>,
    #[serde(rename = "2. Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: Option<String>,
    #[serde(rename = "4. Output Size")]
    pub output_size: Option<String>,
    #[serde(rename = "5. Time Zone")]
    pub time_zone: Option<String>,
}

/// Raw `TIME_SERIES_DAILY` payload. Alpha Vantage answers throttled or invalid
/// requests with 200 and one of the message keys instead of a series.
#[derive(Debug, Deserialize)]
pub struct DailySeriesResponse {
    #[serde(rename = "Meta Data")]
    pub meta_data: Option<MetaData>,
    #[serde(rename = "Time Series (Daily)")]
    pub time_series: Option<BTreeMap<String, DailyPrice>>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
}

impl DailySeriesResponse {
    pub fn into_series(self, symbol: &str) -> Result<SymbolSeries> {
        if let Some(message) = self.error_message.or(self.note).or(self.information) {
            return Err(StonksError::upstream(symbol, message));
        }

        let raw = match self.time_series {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(StonksError::upstream(symbol, "response contained no daily series")),
        };

        let mut entries = BTreeMap::new();
        for (key, price) in raw {
            let date = NaiveDate::parse_from_str(&key, "%Y-%m-%d").map_err(|e| {
                StonksError::upstream(symbol, format!("bad date key {}: {}", key, e))
            })?;
            entries.insert(date, price);
        }

        let meta_data = self.meta_data.unwrap_or_default();
        let time_zone = meta_data
            .time_zone
            .as_deref()
            .and_then(|tz| tz.parse::<Tz>().ok());

        Ok(SymbolSeries {
            symbol: symbol.to_string(),
            meta_data,
            time_zone,
            entries,
        })
    }
}

/// Daily prices for one symbol. Dates are kept sorted so the most recent entry
/// is always last in the map and first in `latest()`.
#[derive(Debug, Clone)]
pub struct SymbolSeries {
    pub symbol: String,
    pub meta_data: MetaData,
    pub time_zone: Option<Tz>,
    entries: BTreeMap<NaiveDate, DailyPrice>,
}

impl SymbolSeries {
    pub fn new(symbol: &str, entries: BTreeMap<NaiveDate, DailyPrice>) -> Self {
        Self {
            symbol: symbol.to_string(),
            meta_data: MetaData::default(),
            time_zone: None,
            entries,
        }
    }

    pub fn with_time_zone(mut self, tz: Tz) -> Self {
        self.time_zone = Some(tz);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries most-recent-first.
    pub fn latest(&self) -> impl Iterator<Item = (&NaiveDate, &DailyPrice)> {
        self.entries.iter().rev()
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next_back().copied()
    }
}

fn volume_from_str<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Volume {
        Text(String),
        Number(i64),
    }

    match Volume::deserialize(deserializer)? {
        Volume::Text(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom),
        Volume::Number(n) => Ok(n),
    }
}
