//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(12) - EMA(26)
//! Signal = EMA(9) of MACD

use crate::indicators::math;

/// Latest MACD line and signal line values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
}

/// Calculate MACD over the full close series
///
/// Both EMAs run over the whole series seeded with its first value, so the
/// MACD line exists from the first bar and the signal line smooths it from
/// there.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Option<MacdValue> {
    if closes.len() < slow + signal {
        return None;
    }

    let fast_ema = math::ema_series(closes, fast);
    let slow_ema = math::ema_series(closes, slow);
    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = math::ema_series(&macd_line, signal);

    Some(MacdValue {
        macd: *macd_line.last()?,
        signal: *signal_line.last()?,
    })
}

/// Calculate MACD with the default periods (12, 26, 9)
pub fn macd_default(closes: &[f64]) -> Option<MacdValue> {
    macd(closes, 12, 26, 9)
}
