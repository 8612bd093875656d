//! Earnings-proximity estimation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "earnings date unknown or not imminent"
///
/// Chosen larger than any realistic day-count threshold so downstream rules
/// can treat unknown as "not urgent" without a special case.
pub const UNKNOWN_HORIZON: i64 = 999;

/// Days from `today` until the next earnings release
///
/// Upstream calendars can return stale metadata, so a date that is already
/// in the past resolves to the sentinel rather than a negative count.
pub fn days_until_earnings(earnings_date: Option<NaiveDate>, today: NaiveDate) -> i64 {
    match earnings_date {
        Some(date) => {
            let days = (date - today).num_days();
            if days >= 0 {
                days
            } else {
                UNKNOWN_HORIZON
            }
        }
        None => UNKNOWN_HORIZON,
    }
}

/// Day-count risk bucket for an earnings horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EarningsRisk {
    /// Release within 5 days
    Imminent,
    /// Release within 14 days
    Near,
    Clear,
}

pub fn risk_bucket(days: i64) -> EarningsRisk {
    if days <= 5 {
        EarningsRisk::Imminent
    } else if days <= 14 {
        EarningsRisk::Near
    } else {
        EarningsRisk::Clear
    }
}
