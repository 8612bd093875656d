//! Benchmark index regime classification

use crate::models::market::{IndicatorSnapshot, MarketRegime, MarketStatus};

/// Classify an index snapshot into a trend regime
///
/// First match wins; comparisons are strict, so an exact tie with a moving
/// average falls to the weaker branch. Total over the four real labels —
/// `Unknown` is reserved for callers with no snapshot at all.
pub fn classify(snapshot: &IndicatorSnapshot) -> MarketRegime {
    if snapshot.close <= snapshot.ma200 {
        return MarketRegime::Bearish;
    }
    if snapshot.close > snapshot.ma20 {
        MarketRegime::Bullish
    } else if snapshot.close > snapshot.ma50 {
        MarketRegime::Correction
    } else {
        MarketRegime::Weak
    }
}

/// Bundle the regime with the index level for display
pub fn market_status(snapshot: &IndicatorSnapshot) -> MarketStatus {
    MarketStatus {
        regime: classify(snapshot),
        price: snapshot.close,
        ma200: snapshot.ma200,
    }
}
