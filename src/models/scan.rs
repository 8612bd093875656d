//! Scan output data models

use crate::models::market::IndicatorSnapshot;
use crate::models::position::PositionKind;
use serde::{Deserialize, Serialize};

/// One satisfied scoring rule and the weight it contributed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReason {
    pub label: String,
    pub weight: u32,
}

/// Display band for a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthBand {
    Exceptional,
    Strong,
    Neutral,
}

impl StrengthBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::Exceptional
        } else if score >= 80 {
            Self::Strong
        } else {
            Self::Neutral
        }
    }
}

/// Full scoring outcome for one symbol, recomputed per scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub symbol: String,
    pub snapshot: IndicatorSnapshot,
    pub score: u32,
    pub band: StrengthBand,
    pub reasons: Vec<ScoreReason>,
    /// Days until the next earnings release, or the unknown sentinel (999)
    pub earnings_days: i64,
}

/// Advisory label for a held position, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    /// Earnings release within the risk window
    EarningsRisk,
    /// Composite score fell below the hold threshold
    Weakening,
    Hold,
}

/// Per-position evaluation joined with the latest scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingReview {
    pub code: String,
    pub kind: PositionKind,
    pub cost: f64,
    pub price: f64,
    pub shares: f64,
    pub profit: f64,
    pub profit_pct: f64,
    pub score: u32,
    pub earnings_days: i64,
    pub advice: Advice,
}
