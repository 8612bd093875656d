//! Market data provider interface

use crate::models::market::Bar;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait MarketDataProvider {
    /// Get daily history for a symbol covering `lookback_days` calendar days
    async fn fetch_history(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<Vec<Bar>, Box<dyn std::error::Error + Send + Sync>>;

    /// Get the next scheduled earnings date for a symbol, if one is known
    async fn fetch_next_earnings(
        &self,
        symbol: &str,
    ) -> Result<Option<NaiveDate>, Box<dyn std::error::Error + Send + Sync>>;
}

pub struct PlaceholderMarketDataProvider;

#[async_trait]
impl MarketDataProvider for PlaceholderMarketDataProvider {
    async fn fetch_history(
        &self,
        _symbol: &str,
        _lookback_days: u32,
    ) -> Result<Vec<Bar>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Vec::new())
    }

    async fn fetch_next_earnings(
        &self,
        _symbol: &str,
    ) -> Result<Option<NaiveDate>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(None)
    }
}
