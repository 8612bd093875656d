//! Unit tests for pool filtering and holdings review

use stockpit::earnings::UNKNOWN_HORIZON;
use stockpit::models::market::IndicatorSnapshot;
use stockpit::models::position::{Position, PositionKind};
use stockpit::models::scan::{Advice, ScanResult, StrengthBand};
use stockpit::watchlist::{
    conservative_pool, momentum_pool, review_holdings, total_profit,
};

fn scan_result(symbol: &str, score: u32, rvol: f64, price: f64, earnings_days: i64) -> ScanResult {
    ScanResult {
        symbol: symbol.to_string(),
        snapshot: IndicatorSnapshot {
            close: price,
            ma20: price,
            ma50: price,
            ma200: price,
            rvol,
            rsi14: 50.0,
            macd: 0.0,
            macd_signal: 0.0,
        },
        score,
        band: StrengthBand::from_score(score),
        reasons: Vec::new(),
        earnings_days,
    }
}

#[test]
fn conservative_pool_filters_and_ranks_by_score() {
    let results = vec![
        scan_result("A", 72, 1.0, 10.0, UNKNOWN_HORIZON),
        scan_result("B", 65, 1.0, 10.0, UNKNOWN_HORIZON),
        scan_result("C", 90, 1.0, 10.0, UNKNOWN_HORIZON),
        scan_result("D", 71, 1.0, 10.0, UNKNOWN_HORIZON),
    ];
    let pool = conservative_pool(&results);
    let symbols: Vec<&str> = pool.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["C", "A", "D"]);
}

#[test]
fn momentum_pool_ranks_by_relative_volume() {
    let results = vec![
        scan_result("A", 85, 1.1, 10.0, UNKNOWN_HORIZON),
        scan_result("B", 79, 9.0, 10.0, UNKNOWN_HORIZON),
        scan_result("C", 95, 2.4, 10.0, UNKNOWN_HORIZON),
        scan_result("D", 80, 1.8, 10.0, UNKNOWN_HORIZON),
    ];
    let pool = momentum_pool(&results);
    let symbols: Vec<&str> = pool.iter().map(|r| r.symbol.as_str()).collect();
    // B misses the score cut despite its volume
    assert_eq!(symbols, vec!["C", "D", "A"]);
}

#[test]
fn equal_sort_keys_keep_scan_order() {
    let results = vec![
        scan_result("A", 85, 1.5, 10.0, UNKNOWN_HORIZON),
        scan_result("B", 85, 1.5, 10.0, UNKNOWN_HORIZON),
        scan_result("C", 85, 1.5, 10.0, UNKNOWN_HORIZON),
    ];
    let pool = momentum_pool(&results);
    let symbols: Vec<&str> = pool.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["A", "B", "C"]);
}

#[test]
fn review_computes_profit() {
    let positions = vec![Position::new("AAPL", PositionKind::Defensive, 100.0, 10.0)];
    let results = vec![scan_result("AAPL", 85, 1.0, 110.0, UNKNOWN_HORIZON)];

    let reviews = review_holdings(&positions, &results);
    assert_eq!(reviews.len(), 1);
    let review = &reviews[0];
    assert!((review.profit - 100.0).abs() < 1e-9);
    assert!((review.profit_pct - 10.0).abs() < 1e-9);
    assert_eq!(review.advice, Advice::Hold);
}

#[test]
fn unscanned_position_is_omitted() {
    let positions = vec![
        Position::new("AAPL", PositionKind::Defensive, 100.0, 10.0),
        Position::new("MSFT", PositionKind::Defensive, 200.0, 5.0),
    ];
    let results = vec![scan_result("AAPL", 85, 1.0, 110.0, UNKNOWN_HORIZON)];

    let reviews = review_holdings(&positions, &results);
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].code, "AAPL");
}

#[test]
fn earnings_risk_outranks_weak_score() {
    let positions = vec![Position::new("GME", PositionKind::Aggressive, 20.0, 50.0)];
    let results = vec![scan_result("GME", 40, 1.0, 25.0, 2)];

    let reviews = review_holdings(&positions, &results);
    assert_eq!(reviews[0].advice, Advice::EarningsRisk);
}

#[test]
fn advice_boundaries() {
    let positions = vec![Position::new("AAPL", PositionKind::Defensive, 100.0, 1.0)];

    // Earnings in exactly 5 days still flags the exit
    let results = vec![scan_result("AAPL", 85, 1.0, 110.0, 5)];
    assert_eq!(review_holdings(&positions, &results)[0].advice, Advice::EarningsRisk);

    // 6 days is outside the window; a score of exactly 60 still holds
    let results = vec![scan_result("AAPL", 60, 1.0, 110.0, 6)];
    assert_eq!(review_holdings(&positions, &results)[0].advice, Advice::Hold);

    let results = vec![scan_result("AAPL", 59, 1.0, 110.0, 6)];
    assert_eq!(review_holdings(&positions, &results)[0].advice, Advice::Weakening);
}

#[test]
fn total_profit_sums_reviews() {
    let positions = vec![
        Position::new("AAPL", PositionKind::Defensive, 100.0, 10.0),
        Position::new("PLTR", PositionKind::Aggressive, 30.0, 100.0),
    ];
    let results = vec![
        scan_result("AAPL", 85, 1.0, 110.0, UNKNOWN_HORIZON),
        scan_result("PLTR", 90, 2.0, 25.0, UNKNOWN_HORIZON),
    ];

    let reviews = review_holdings(&positions, &results);
    // +100 on AAPL, -500 on PLTR
    assert!((total_profit(&reviews) - (-400.0)).abs() < 1e-9);
}
