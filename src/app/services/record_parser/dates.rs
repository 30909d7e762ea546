//! Contract date parsing
//!
//! Period fields in contract rows are day-first. Strict mode accepts exactly
//! `DD/MM/YYYY` and nothing else. Permissive mode trims the text and walks an
//! ordered list of formats, day-first before year-first, so `05/04/2025` is
//! April 5th while the unambiguous `2025-03-01` is March 1st. Date-only
//! inputs resolve to midnight.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::DateParseMode;
use crate::constants::{
    DAY_FIRST_DATETIME_FORMATS, DAY_FIRST_DATE_FORMATS, STRICT_DATE_FORMAT,
    YEAR_FIRST_DATETIME_FORMATS, YEAR_FIRST_DATE_FORMATS,
};

/// Parse a contract date field under the given mode
///
/// Returns `None` when the text does not parse; the caller decides whether
/// that rejects the row.
pub fn parse_contract_date(text: &str, mode: DateParseMode) -> Option<NaiveDateTime> {
    match mode {
        DateParseMode::Strict => parse_strict(text),
        DateParseMode::Permissive => parse_permissive(text),
    }
}

fn parse_strict(text: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(text, STRICT_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn parse_permissive(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in DAY_FIRST_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    for format in DAY_FIRST_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime);
        }
    }

    for format in YEAR_FIRST_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    for format in YEAR_FIRST_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime);
        }
    }

    None
}
