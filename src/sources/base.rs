use crate::models::series::SymbolSeries;
use crate::errors::Result;
use async_trait::async_trait;

/// Base trait for daily price sources
#[async_trait]
pub trait QuoteSource {
    /// Short provider name, used in log lines
    fn provider_name(&self) -> &'static str;

    /// Fetch the compact daily series for one symbol
    async fn fetch_daily_series(&self, symbol: &str) -> Result<SymbolSeries>;
}
