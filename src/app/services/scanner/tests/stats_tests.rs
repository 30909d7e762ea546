//! Tests for scan statistics and the scan outcome

use std::time::Duration;

use crate::app::models::RejectReason;
use crate::app::services::scanner::diagnostics::DiagnosticLog;
use crate::app::services::scanner::stats::{ScanOutcome, ScanStats};

#[test]
fn test_new_stats_are_zeroed() {
    let stats = ScanStats::new();
    assert_eq!(stats.rows_read, 0);
    assert_eq!(stats.rows_kept, 0);
    assert_eq!(stats.rows_outside_window, 0);
    assert_eq!(stats.rows_rejected(), 0);
    assert_eq!(stats.elapsed, Duration::ZERO);
}

#[test]
fn test_record_rejection_bumps_the_matching_counter() {
    let mut stats = ScanStats::new();
    stats.record_rejection(&RejectReason::MalformedRow { found: 5 });
    stats.record_rejection(&RejectReason::InvalidIdentifier);
    stats.record_rejection(&RejectReason::InvalidIdentifier);
    stats.record_rejection(&RejectReason::InvalidDate);

    assert_eq!(stats.rejected_malformed, 1);
    assert_eq!(stats.rejected_identifier, 2);
    assert_eq!(stats.rejected_date, 1);
    assert_eq!(stats.rows_rejected(), 4);
}

#[test]
fn test_kept_rate() {
    let mut stats = ScanStats::new();
    assert_eq!(stats.kept_rate(), 0.0);

    stats.rows_read = 4;
    stats.rows_kept = 1;
    assert!((stats.kept_rate() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_elapsed_seconds() {
    let stats = ScanStats {
        elapsed: Duration::from_millis(1_250),
        ..Default::default()
    };
    assert!((stats.elapsed_seconds() - 1.25).abs() < 1e-9);
}

#[test]
fn test_summary_reports_every_bucket() {
    let stats = ScanStats {
        rows_read: 10,
        rows_kept: 4,
        rows_outside_window: 3,
        rejected_malformed: 1,
        rejected_identifier: 1,
        rejected_date: 1,
        elapsed: Duration::from_millis(120),
    };

    assert_eq!(
        stats.summary(),
        "10 rows read: 4 kept, 3 outside window, 3 rejected in 0.12s"
    );
}

#[test]
fn test_outcome_record_count_matches_records() {
    let outcome = ScanOutcome::new(Vec::new(), ScanStats::new(), DiagnosticLog::new(false));
    assert_eq!(outcome.record_count(), 0);
    assert!(outcome.is_empty());
}
