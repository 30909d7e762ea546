//! Data models for contract filtering
//!
//! This module contains the core data structures for representing validated
//! contract rows, the inclusive filter window, and row rejection reasons.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants;

// =============================================================================
// Contract Record Structure
// =============================================================================

/// A validated contract row
///
/// Holds the six field texts exactly as they were read, alongside the parsed
/// period datetimes. A record is only constructed once the row has passed
/// every validation step, so holders can rely on the parsed fields being
/// present and the raw texts being re-encodable verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContractRecord {
    /// Contract holder name, as read
    pub name: String,

    /// National identifier text (format `NNN.NNN.NNN-NN`), as read
    pub national_id: String,

    /// State identifier text (format `NN.NNN.NNN-N`), as read
    pub state_id: String,

    /// Free-text address, as read
    pub address: String,

    /// Period start field text, as read
    pub period_start_text: String,

    /// Period end field text, as read
    pub period_end_text: String,

    /// Parsed period start (midnight when the field carried no time)
    pub period_start: NaiveDateTime,

    /// Parsed period end (midnight when the field carried no time)
    pub period_end: NaiveDateTime,
}

impl ContractRecord {
    /// The six original field texts in input order, for re-encoding
    pub fn raw_fields(&self) -> [&str; constants::CONTRACT_FIELD_COUNT] {
        [
            &self.name,
            &self.national_id,
            &self.state_id,
            &self.address,
            &self.period_start_text,
            &self.period_end_text,
        ]
    }
}

// =============================================================================
// Filter Window
// =============================================================================

/// Inclusive datetime window contracts are matched against
///
/// Bounds are day-granular at construction: the window starts at midnight on
/// its first day and ends at 23:59:59.999999 on its last day, so a contract
/// touching any part of either boundary day still matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterWindow {
    /// First instant inside the window
    pub start: NaiveDateTime,

    /// Last instant inside the window
    pub end: NaiveDateTime,
}

impl FilterWindow {
    /// Build a window spanning the given calendar dates, inclusive
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        let end_of_day = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap();
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(end_of_day),
        }
    }

    /// Build a window covering January 1 through December 31 of a year
    pub fn for_year(year: i32) -> Self {
        let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let dec_31 = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        Self::from_dates(jan_1, dec_31)
    }

    /// Build a window covering the current calendar year
    pub fn current_year() -> Self {
        Self::for_year(constants::default_window_year())
    }

    /// True when the start bound lies after the end bound
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

// =============================================================================
// Rejection Reasons
// =============================================================================

/// Why a row was rejected during validation
///
/// Rejections are per-row outcomes, not errors: the scan records them and
/// moves on to the next row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The row did not have exactly six fields
    MalformedRow { found: usize },

    /// One of the two identifier fields failed its format check
    InvalidIdentifier,

    /// One of the two period fields did not parse as a date
    InvalidDate,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MalformedRow { found } => {
                write!(f, "malformed row ({} fields)", found)
            }
            RejectReason::InvalidIdentifier => write!(f, "invalid identifier"),
            RejectReason::InvalidDate => write!(f, "invalid date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> ContractRecord {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        ContractRecord {
            name: "Ana Souza".to_string(),
            national_id: "111.222.333-44".to_string(),
            state_id: "12.345.678-9".to_string(),
            address: "Rua A, 10".to_string(),
            period_start_text: "01/03/2025".to_string(),
            period_end_text: "15/03/2025".to_string(),
            period_start: start.and_time(NaiveTime::MIN),
            period_end: end.and_time(NaiveTime::MIN),
        }
    }

    #[test]
    fn test_raw_fields_preserve_input_order() {
        let record = test_record();
        let fields = record.raw_fields();
        assert_eq!(fields[0], "Ana Souza");
        assert_eq!(fields[1], "111.222.333-44");
        assert_eq!(fields[2], "12.345.678-9");
        assert_eq!(fields[3], "Rua A, 10");
        assert_eq!(fields[4], "01/03/2025");
        assert_eq!(fields[5], "15/03/2025");
    }

    #[test]
    fn test_window_bounds_cover_whole_days() {
        let window = FilterWindow::from_dates(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        );

        assert_eq!(
            window.start,
            NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
        let last_instant = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_time(NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap());
        assert_eq!(window.end, last_instant);
    }

    #[test]
    fn test_for_year_spans_january_through_december() {
        let window = FilterWindow::for_year(2025);
        assert_eq!(window, FilterWindow::from_dates(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        ));
        assert!(!window.is_inverted());
    }

    #[test]
    fn test_inverted_window_detection() {
        let window = FilterWindow::from_dates(
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        assert!(window.is_inverted());
    }

    #[test]
    fn test_reject_reason_display() {
        assert_eq!(
            RejectReason::MalformedRow { found: 5 }.to_string(),
            "malformed row (5 fields)"
        );
        assert_eq!(
            RejectReason::InvalidIdentifier.to_string(),
            "invalid identifier"
        );
        assert_eq!(RejectReason::InvalidDate.to_string(), "invalid date");
    }
}
