//! Unit tests for the MACD indicator

use stockpit::indicators::momentum::{macd, macd_default};

#[test]
fn macd_insufficient_data() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    assert!(macd_default(&closes).is_none());
}

#[test]
fn macd_constant_series_is_flat() {
    let closes = vec![50.0; 60];
    let value = macd_default(&closes).unwrap();
    assert!(value.macd.abs() < 1e-9);
    assert!(value.signal.abs() < 1e-9);
}

#[test]
fn macd_rising_series_is_bullish() {
    // Fast EMA tracks a rising series closer than the slow one, and the
    // signal line lags the MACD line below
    let closes: Vec<f64> = (0..120).map(|i| 100.0 + i as f64 * 0.5).collect();
    let value = macd_default(&closes).unwrap();
    assert!(value.macd > 0.0);
    assert!(value.macd > value.signal);
}

#[test]
fn macd_falling_series_is_bearish() {
    let closes: Vec<f64> = (0..120).map(|i| 200.0 - i as f64 * 0.5).collect();
    let value = macd_default(&closes).unwrap();
    assert!(value.macd < 0.0);
    assert!(value.macd < value.signal);
}

#[test]
fn macd_custom_periods() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let value = macd(&closes, 5, 10, 3).unwrap();
    assert!(value.macd.is_finite());
    assert!(value.signal.is_finite());
}
