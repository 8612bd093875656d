//! Environment-based configuration

use std::env;

/// Resolve the deployment environment name (defaults to "sandbox")
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Runtime configuration for the scanner
#[derive(Debug, Clone)]
pub struct Config {
    /// Benchmark index symbol used for the market regime check
    pub index_symbol: String,
    /// Calendar days of daily history to request (must cover 200 bars)
    pub lookback_days: u32,
    /// Path of the holdings CSV file
    pub holdings_path: String,
    /// Conservative pool candidates (large caps)
    pub conservative_symbols: Vec<String>,
    /// Momentum pool candidates (high-beta names)
    pub momentum_symbols: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_symbol: "^GSPC".to_string(),
            lookback_days: 365,
            holdings_path: "holdings.csv".to_string(),
            conservative_symbols: to_symbols(
                "AAPL,MSFT,GOOGL,AMZN,META,TSLA,NVDA,AMD,COST,BRK-B,JPM,UNH,LLY,AVGO,V",
            ),
            momentum_symbols: to_symbols(
                "PLTR,SOFI,MARA,COIN,GME,PATH,UPST,AI,DKNG,RBLX,AFRM,CVNA,RIOT,MSTR",
            ),
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            index_symbol: env::var("INDEX_SYMBOL").unwrap_or(defaults.index_symbol),
            lookback_days: env::var("LOOKBACK_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.lookback_days),
            holdings_path: env::var("HOLDINGS_PATH").unwrap_or(defaults.holdings_path),
            conservative_symbols: env::var("CONSERVATIVE_SYMBOLS")
                .map(|v| to_symbols(&v))
                .unwrap_or(defaults.conservative_symbols),
            momentum_symbols: env::var("MOMENTUM_SYMBOLS")
                .map(|v| to_symbols(&v))
                .unwrap_or(defaults.momentum_symbols),
        }
    }
}

fn to_symbols(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}
