use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily price/volume bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, close: f64, volume: f64) -> Self {
        Self {
            date,
            close,
            volume,
        }
    }
}

/// Most-recent indicator values derived from the last bar of a daily series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub close: f64,
    pub ma20: f64,
    pub ma50: f64,
    pub ma200: f64,
    pub rvol: f64,
    pub rsi14: f64,
    pub macd: f64,
    pub macd_signal: f64,
}

impl IndicatorSnapshot {
    /// Percent distance of the close from the 200-day average
    pub fn ma200_distance_pct(&self) -> f64 {
        (self.close - self.ma200) / self.ma200 * 100.0
    }
}

/// Trend state of the benchmark index relative to its moving averages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketRegime {
    Bullish,
    Correction,
    Weak,
    Bearish,
    #[default]
    Unknown,
}

/// Benchmark index summary for display alongside scan output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketStatus {
    pub regime: MarketRegime,
    pub price: f64,
    pub ma200: f64,
}
