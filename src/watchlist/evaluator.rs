//! Threshold rules over scan results

use crate::models::position::Position;
use crate::models::scan::{Advice, HoldingReview, ScanResult};
use std::cmp::Ordering;

/// Minimum score for the conservative pool
pub const CONSERVATIVE_MIN_SCORE: u32 = 70;

/// Minimum score for the momentum pool
pub const MOMENTUM_MIN_SCORE: u32 = 80;

/// Score below which a held position is flagged as weakening
pub const HOLD_MIN_SCORE: u32 = 60;

/// Days-to-earnings at or below which a holding is flagged for exit
pub const EARNINGS_RISK_DAYS: i64 = 5;

/// Ranking applied to a filtered pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOrder {
    /// Descending composite score
    ByScore,
    /// Descending relative volume
    ByRelativeVolume,
}

/// Keep results at or above `min_score` and rank them
///
/// The sort is stable, so equal keys keep their original scan order.
pub fn filter_pool(results: &[ScanResult], min_score: u32, order: PoolOrder) -> Vec<ScanResult> {
    let mut pool: Vec<ScanResult> = results
        .iter()
        .filter(|r| r.score >= min_score)
        .cloned()
        .collect();

    match order {
        PoolOrder::ByScore => pool.sort_by(|a, b| b.score.cmp(&a.score)),
        PoolOrder::ByRelativeVolume => pool.sort_by(|a, b| {
            b.snapshot
                .rvol
                .partial_cmp(&a.snapshot.rvol)
                .unwrap_or(Ordering::Equal)
        }),
    }

    pool
}

/// Conservative pool: score >= 70, strongest first
pub fn conservative_pool(results: &[ScanResult]) -> Vec<ScanResult> {
    filter_pool(results, CONSERVATIVE_MIN_SCORE, PoolOrder::ByScore)
}

/// Momentum pool: score >= 80, most active first
pub fn momentum_pool(results: &[ScanResult]) -> Vec<ScanResult> {
    filter_pool(results, MOMENTUM_MIN_SCORE, PoolOrder::ByRelativeVolume)
}

/// Join positions with their scan results and derive advisories
///
/// A position whose symbol has no scan result is omitted from the output;
/// callers treat "present in input, absent in output" as data unavailable.
pub fn review_holdings(positions: &[Position], results: &[ScanResult]) -> Vec<HoldingReview> {
    positions
        .iter()
        .filter_map(|position| {
            let result = results.iter().find(|r| r.symbol == position.code)?;
            let price = result.snapshot.close;
            let profit = (price - position.cost) * position.shares;
            let profit_pct = (price - position.cost) / position.cost * 100.0;

            let advice = if result.earnings_days <= EARNINGS_RISK_DAYS {
                Advice::EarningsRisk
            } else if result.score < HOLD_MIN_SCORE {
                Advice::Weakening
            } else {
                Advice::Hold
            };

            Some(HoldingReview {
                code: position.code.clone(),
                kind: position.kind,
                cost: position.cost,
                price,
                shares: position.shares,
                profit,
                profit_pct,
                score: result.score,
                earnings_days: result.earnings_days,
                advice,
            })
        })
        .collect()
}

/// Total dollar profit across reviewed holdings
pub fn total_profit(reviews: &[HoldingReview]) -> f64 {
    reviews.iter().map(|r| r.profit).sum()
}
