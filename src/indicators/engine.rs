//! Snapshot computation over a daily bar series

use crate::indicators::{momentum, trend, volume};
use crate::models::market::{Bar, IndicatorSnapshot};

/// Minimum bars required for a snapshot (the 200-day average needs them all)
pub const MIN_BARS: usize = 200;

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Compute the most-recent indicator values for a series
    ///
    /// A stateless pure function: every call recomputes from scratch.
    /// Returns `None` when the series is shorter than [`MIN_BARS`]; callers
    /// treat that as "skip this symbol", not as a fault.
    pub fn snapshot(bars: &[Bar]) -> Option<IndicatorSnapshot> {
        if bars.len() < MIN_BARS {
            return None;
        }

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

        let close = *closes.last()?;
        let (ma20, ma50, ma200) = trend::moving_average_trio(&closes)?;
        let rvol = volume::relative_volume(&volumes, 20)?;
        let rsi14 = momentum::relative_strength_index_default(&closes)?;
        let macd = momentum::macd_default(&closes)?;

        Some(IndicatorSnapshot {
            close,
            ma20,
            ma50,
            ma200,
            rvol,
            rsi14,
            macd: macd.macd,
            macd_signal: macd.signal,
        })
    }
}
