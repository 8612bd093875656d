//! Stockpit Scanner
//!
//! Scans the benchmark index, both watchlist pools, and the stored holdings,
//! then prints a plain-text report.

use chrono::Utc;
use dotenvy::dotenv;
use std::sync::Arc;
use stockpit::config::Config;
use stockpit::logging;
use stockpit::models::market::MarketRegime;
use stockpit::models::scan::ScanResult;
use stockpit::scanner::Scanner;
use stockpit::services::market_data::MarketDataProvider;
use stockpit::services::yahoo::YahooFinanceProvider;
use stockpit::storage::{CsvHoldingsStore, HoldingsStore};
use stockpit::watchlist;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let env = stockpit::config::get_environment();
    info!("Starting Stockpit Scanner");
    info!(environment = %env, index = %config.index_symbol, "Environment");

    let provider: Arc<dyn MarketDataProvider + Send + Sync> =
        Arc::new(YahooFinanceProvider::new()?);
    let scanner = Scanner::new(provider, config.lookback_days);
    let today = Utc::now().date_naive();

    // Benchmark index first: the regime frames everything below it
    match scanner.market_status(&config.index_symbol).await {
        Some(status) => {
            println!(
                "{} {:?}  close {:.0}  ma200 {:.0}",
                config.index_symbol, status.regime, status.price, status.ma200
            );
            if status.regime == MarketRegime::Bearish {
                warn!("index below its 200-day average");
            }
        }
        None => {
            println!("{} {:?}", config.index_symbol, MarketRegime::Unknown);
        }
    }
    println!();

    info!(
        count = config.conservative_symbols.len(),
        "scanning conservative pool"
    );
    let conservative_results = scanner.scan_pool(&config.conservative_symbols, today).await;
    print_pool(
        "Conservative pool (score >= 70)",
        &watchlist::conservative_pool(&conservative_results),
    );

    info!(count = config.momentum_symbols.len(), "scanning momentum pool");
    let momentum_results = scanner.scan_pool(&config.momentum_symbols, today).await;
    print_pool(
        "Momentum pool (score >= 80)",
        &watchlist::momentum_pool(&momentum_results),
    );

    let store = CsvHoldingsStore::new(&config.holdings_path);
    let positions = store.load()?;
    if positions.is_empty() {
        info!(path = %config.holdings_path, "no holdings on file");
        return Ok(());
    }

    let codes: Vec<String> = positions.iter().map(|p| p.code.clone()).collect();
    let holding_results = scanner.scan_pool(&codes, today).await;
    let reviews = watchlist::review_holdings(&positions, &holding_results);

    println!("Holdings:");
    for review in &reviews {
        println!(
            "  {:<6} {:?}  cost {:.2}  price {:.2}  p/l {:+.0} ({:+.2}%)  score {}  earnings {}d  {:?}",
            review.code,
            review.kind,
            review.cost,
            review.price,
            review.profit,
            review.profit_pct,
            review.score,
            review.earnings_days,
            review.advice
        );
    }
    println!("  total p/l {:+.0}", watchlist::total_profit(&reviews));
    if reviews.len() < positions.len() {
        warn!(
            missing = positions.len() - reviews.len(),
            "some holdings had no scan data"
        );
    }

    Ok(())
}

fn print_pool(title: &str, pool: &[ScanResult]) {
    println!("{}:", title);
    if pool.is_empty() {
        println!("  (no symbols qualified)");
    }
    for result in pool {
        println!(
            "  {:<6} score {:>3} {:?}  rvol {:.2}x  rsi {:.0}  vs ma200 {:+.2}%  earnings {}d",
            result.symbol,
            result.score,
            result.band,
            result.snapshot.rvol,
            result.snapshot.rsi14,
            result.snapshot.ma200_distance_pct(),
            result.earnings_days
        );
    }
    println!();
}
