//! Relative volume indicator

use crate::indicators::math;

/// Latest volume divided by its `period`-day average
///
/// The averaging window includes the latest bar. A zero average volume maps
/// to 0.0 ("no volume signal"), not an error.
pub fn relative_volume(volumes: &[f64], period: usize) -> Option<f64> {
    let latest = *volumes.last()?;
    let average = math::sma(volumes, period)?;
    if average > 0.0 {
        Some(latest / average)
    } else {
        Some(0.0)
    }
}
