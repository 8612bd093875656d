//! Shared rolling-statistics helpers

/// Simple mean of the last `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Exponential moving average over the whole series, one value per input
///
/// Standard recursion with alpha = 2 / (period + 1), seeded with the first
/// value (no bias adjustment).
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() || period == 0 {
        return Vec::new();
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut current = values[0];
    out.push(current);
    for &value in &values[1..] {
        current = alpha * value + (1.0 - alpha) * current;
        out.push(current);
    }
    out
}

/// Latest exponential moving average value
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied()
}
