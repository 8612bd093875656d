//! Per-symbol scan pipeline gluing collaborators to the scoring core

use crate::earnings;
use crate::indicators::{IndicatorEngine, MIN_BARS};
use crate::models::market::MarketStatus;
use crate::models::scan::ScanResult;
use crate::regime;
use crate::scoring::ScoreEngine;
use crate::services::market_data::MarketDataProvider;
use chrono::NaiveDate;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Scanner {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    lookback_days: u32,
}

impl Scanner {
    pub fn new(provider: Arc<dyn MarketDataProvider + Send + Sync>, lookback_days: u32) -> Self {
        Self {
            provider,
            lookback_days,
        }
    }

    /// Score one symbol from fresh history
    ///
    /// Any collaborator failure or insufficient history degrades to `None`;
    /// absent output means "data unavailable", never a partial record.
    pub async fn scan_symbol(&self, symbol: &str, today: NaiveDate) -> Option<ScanResult> {
        let bars = match self.provider.fetch_history(symbol, self.lookback_days).await {
            Ok(bars) => bars,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "history fetch failed, skipping");
                return None;
            }
        };

        let snapshot = match IndicatorEngine::snapshot(&bars) {
            Some(snapshot) => snapshot,
            None => {
                debug!(
                    symbol = %symbol,
                    count = bars.len(),
                    min = MIN_BARS,
                    "not enough history, skipping"
                );
                return None;
            }
        };

        // A failed earnings lookup is not fatal; the horizon falls back to
        // the unknown sentinel.
        let earnings_date = match self.provider.fetch_next_earnings(symbol).await {
            Ok(date) => date,
            Err(e) => {
                debug!(symbol = %symbol, error = %e, "earnings lookup failed");
                None
            }
        };
        let earnings_days = earnings::days_until_earnings(earnings_date, today);

        let breakdown = ScoreEngine::evaluate(&snapshot);
        debug!(
            symbol = %symbol,
            score = breakdown.score,
            rules = breakdown.reasons.len(),
            "scored symbol"
        );

        Some(ScanResult {
            symbol: symbol.to_string(),
            score: breakdown.score,
            band: breakdown.band(),
            reasons: breakdown.reasons,
            snapshot,
            earnings_days,
        })
    }

    /// Scan a pool of symbols concurrently
    ///
    /// Per-symbol scans are independent; aggregation happens after all of
    /// them complete. Failed symbols are simply missing from the output.
    pub async fn scan_pool(&self, symbols: &[String], today: NaiveDate) -> Vec<ScanResult> {
        let scans = symbols.iter().map(|symbol| self.scan_symbol(symbol, today));
        join_all(scans).await.into_iter().flatten().collect()
    }

    /// Classify the benchmark index
    pub async fn market_status(&self, index_symbol: &str) -> Option<MarketStatus> {
        let bars = match self.provider.fetch_history(index_symbol, self.lookback_days).await {
            Ok(bars) => bars,
            Err(e) => {
                warn!(symbol = %index_symbol, error = %e, "index fetch failed");
                return None;
            }
        };
        let snapshot = IndicatorEngine::snapshot(&bars)?;
        Some(regime::market_status(&snapshot))
    }
}
