//! Test utilities for scanner testing
//!
//! Shared window, config, and scan helpers used across the scanner,
//! period-filter, stats, and diagnostics test modules.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::app::models::FilterWindow;
use crate::app::services::scanner::scanner::ContractScanner;
use crate::app::services::scanner::stats::ScanOutcome;
use crate::config::ScanConfig;

mod stats_tests;

/// Midnight on the given day
pub fn dt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

/// The full 2025 calendar year window
pub fn year_window() -> FilterWindow {
    FilterWindow::for_year(2025)
}

/// Default configuration over the 2025 window
pub fn base_config() -> ScanConfig {
    ScanConfig::new(year_window())
}

/// Scan CSV text under the given configuration
pub fn scan(text: &str, config: ScanConfig) -> ScanOutcome {
    ContractScanner::new(config)
        .scan_bytes(text.as_bytes(), None)
        .unwrap()
}
