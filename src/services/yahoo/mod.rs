//! Yahoo Finance market data provider
//!
//! Daily history comes from the v8 chart endpoint; the next earnings date
//! from the v10 quoteSummary calendarEvents module, normalized to a single
//! optional date.

use crate::models::market::Bar;
use crate::services::market_data::MarketDataProvider;
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub struct YahooFinanceProvider {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryEnvelope,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "calendarEvents")]
    calendar_events: Option<CalendarEvents>,
}

#[derive(Debug, Deserialize)]
struct CalendarEvents {
    earnings: Option<EarningsCalendar>,
}

#[derive(Debug, Deserialize)]
struct EarningsCalendar {
    #[serde(rename = "earningsDate", default)]
    earnings_date: Vec<EpochValue>,
}

#[derive(Debug, Deserialize)]
struct EpochValue {
    raw: Option<i64>,
}

impl YahooFinanceProvider {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the provider at a different host (used by tests)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
        let response = (|| async {
            self.client
                .get(url)
                .send()
                .await?
                .error_for_status()
        })
        .retry(ExponentialBuilder::default())
        .await?;

        Ok(response.json::<T>().await?)
    }

    fn parse_chart(
        &self,
        response: ChartResponse,
    ) -> Result<Vec<Bar>, Box<dyn std::error::Error + Send + Sync>> {
        let result = response
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or("chart response has no result")?;

        let timestamps = result.timestamp.unwrap_or_default();
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or("chart response has no quote block")?;
        let closes = quote.close.unwrap_or_default();
        let volumes = quote.volume.unwrap_or_default();

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            // Halted or partial days come back as nulls; skip them
            let close = match closes.get(i).copied().flatten() {
                Some(c) => c,
                None => continue,
            };
            let volume = volumes.get(i).copied().flatten().unwrap_or(0.0);
            let date = match DateTime::from_timestamp(ts, 0) {
                Some(dt) => dt.date_naive(),
                None => continue,
            };
            bars.push(Bar::new(date, close, volume));
        }

        Ok(bars)
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn fetch_history(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<Vec<Bar>, Box<dyn std::error::Error + Send + Sync>> {
        let end = Utc::now();
        let start = end - chrono::Duration::days(lookback_days as i64);
        let url = format!(
            "{}/v8/finance/chart/{}?interval=1d&period1={}&period2={}",
            self.base_url,
            symbol,
            start.timestamp(),
            end.timestamp()
        );

        let response: ChartResponse = self.get_json(&url).await?;
        let bars = self.parse_chart(response)?;
        debug!(symbol = %symbol, count = bars.len(), "fetched daily history");
        Ok(bars)
    }

    async fn fetch_next_earnings(
        &self,
        symbol: &str,
    ) -> Result<Option<NaiveDate>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=calendarEvents",
            self.base_url, symbol
        );

        let response: QuoteSummaryResponse = self.get_json(&url).await?;
        let date = response
            .quote_summary
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|r| r.calendar_events)
            .and_then(|c| c.earnings)
            .and_then(|e| e.earnings_date.into_iter().next())
            .and_then(|v| v.raw)
            .and_then(|raw| DateTime::from_timestamp(raw, 0))
            .map(|dt| dt.date_naive());

        debug!(symbol = %symbol, date = ?date, "fetched next earnings date");
        Ok(date)
    }
}
