//! Unit tests for earnings-proximity estimation

use chrono::{Days, NaiveDate};
use stockpit::earnings::{days_until_earnings, risk_bucket, EarningsRisk, UNKNOWN_HORIZON};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
}

#[test]
fn future_date_counts_days() {
    let date = today().checked_add_days(Days::new(7)).unwrap();
    assert_eq!(days_until_earnings(Some(date), today()), 7);
}

#[test]
fn same_day_is_zero() {
    assert_eq!(days_until_earnings(Some(today()), today()), 0);
}

#[test]
fn past_date_is_unknown() {
    let date = today().checked_sub_days(Days::new(30)).unwrap();
    assert_eq!(days_until_earnings(Some(date), today()), UNKNOWN_HORIZON);
}

#[test]
fn missing_date_is_unknown() {
    assert_eq!(days_until_earnings(None, today()), UNKNOWN_HORIZON);
}

#[test]
fn sentinel_exceeds_every_real_threshold() {
    assert!(UNKNOWN_HORIZON > 14);
    assert_eq!(risk_bucket(UNKNOWN_HORIZON), EarningsRisk::Clear);
}

#[test]
fn risk_buckets() {
    assert_eq!(risk_bucket(0), EarningsRisk::Imminent);
    assert_eq!(risk_bucket(5), EarningsRisk::Imminent);
    assert_eq!(risk_bucket(6), EarningsRisk::Near);
    assert_eq!(risk_bucket(14), EarningsRisk::Near);
    assert_eq!(risk_bucket(15), EarningsRisk::Clear);
}
