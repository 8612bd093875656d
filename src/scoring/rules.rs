//! Additive scoring rule table

use crate::models::market::IndicatorSnapshot;

/// Score every symbol starts from before any rule fires
pub const BASE_SCORE: u32 = 60;

/// Upper clamp for the composite score
pub const MAX_SCORE: u32 = 100;

/// One boolean scoring gate
///
/// Rules are independent and additive; the volume tiers intentionally
/// stack, so higher relative volume earns every tier below it as well.
pub struct StrengthRule {
    pub label: &'static str,
    pub weight: u32,
    pub check: fn(&IndicatorSnapshot) -> bool,
}

pub const RULES: [StrengthRule; 10] = [
    StrengthRule {
        label: "close above 200-day MA",
        weight: 10,
        check: |s| s.close > s.ma200,
    },
    StrengthRule {
        label: "50-day MA above 200-day MA",
        weight: 10,
        check: |s| s.ma50 > s.ma200,
    },
    StrengthRule {
        label: "close above 50-day MA",
        weight: 10,
        check: |s| s.close > s.ma50,
    },
    StrengthRule {
        label: "close above 20-day MA",
        weight: 10,
        check: |s| s.close > s.ma20,
    },
    StrengthRule {
        label: "volume above 1.2x average",
        weight: 5,
        check: |s| s.rvol > 1.2,
    },
    StrengthRule {
        label: "volume above 1.5x average",
        weight: 10,
        check: |s| s.rvol > 1.5,
    },
    StrengthRule {
        label: "volume above 2x average",
        weight: 15,
        check: |s| s.rvol > 2.0,
    },
    StrengthRule {
        label: "RSI in 50-75 band",
        weight: 10,
        check: |s| s.rsi14 > 50.0 && s.rsi14 < 75.0,
    },
    StrengthRule {
        label: "MACD above signal line",
        weight: 10,
        check: |s| s.macd > s.macd_signal,
    },
    StrengthRule {
        label: "MACD above zero",
        weight: 10,
        check: |s| s.macd > 0.0,
    },
];
