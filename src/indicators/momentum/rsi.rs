//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss

/// Calculate RSI over the last `period` closing-price changes
///
/// Uses simple averages of the positive and negative deltas. Zero deltas
/// contribute to neither side. A zero average loss means all gains, so the
/// ratio saturates at 100 instead of dividing by zero.
pub fn relative_strength_index(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let window = &closes[closes.len() - period - 1..];
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for pair in window.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gain_sum += change;
        } else {
            loss_sum += change.abs();
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with the default period (14)
pub fn relative_strength_index_default(closes: &[f64]) -> Option<f64> {
    relative_strength_index(closes, 14)
}
