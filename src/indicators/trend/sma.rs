//! Simple moving averages of closing prices

use crate::indicators::math;

/// Latest `period`-day simple moving average of the closes
pub fn moving_average(closes: &[f64], period: usize) -> Option<f64> {
    math::sma(closes, period)
}

/// The 20/50/200-day averages used by the scorer and regime check
pub fn moving_average_trio(closes: &[f64]) -> Option<(f64, f64, f64)> {
    Some((
        moving_average(closes, 20)?,
        moving_average(closes, 50)?,
        moving_average(closes, 200)?,
    ))
}
