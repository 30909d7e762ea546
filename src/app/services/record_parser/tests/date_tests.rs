//! Tests for contract date parsing

use chrono::{Datelike, NaiveDate, Timelike};

use crate::app::services::record_parser::dates::parse_contract_date;
use crate::config::DateParseMode;

fn march_first_2025() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_strict_accepts_canonical_day_first() {
    let parsed = parse_contract_date("01/03/2025", DateParseMode::Strict);
    assert_eq!(parsed, Some(march_first_2025()));
}

#[test]
fn test_strict_rejects_other_separators_and_orders() {
    assert!(parse_contract_date("2025-03-01", DateParseMode::Strict).is_none());
    assert!(parse_contract_date("01-03-2025", DateParseMode::Strict).is_none());
    assert!(parse_contract_date("01.03.2025", DateParseMode::Strict).is_none());
    assert!(parse_contract_date("01 Mar 2025", DateParseMode::Strict).is_none());
}

#[test]
fn test_strict_does_not_trim() {
    assert!(parse_contract_date(" 01/03/2025", DateParseMode::Strict).is_none());
    assert!(parse_contract_date("01/03/2025 ", DateParseMode::Strict).is_none());
}

#[test]
fn test_strict_rejects_time_suffix() {
    assert!(parse_contract_date("01/03/2025 14:30:00", DateParseMode::Strict).is_none());
}

#[test]
fn test_strict_rejects_impossible_dates() {
    assert!(parse_contract_date("32/01/2025", DateParseMode::Strict).is_none());
    assert!(parse_contract_date("31/02/2025", DateParseMode::Strict).is_none());
    assert!(parse_contract_date("15/13/2025", DateParseMode::Strict).is_none());
}

#[test]
fn test_permissive_accepts_day_first_separators() {
    for text in ["01/03/2025", "01-03-2025", "01.03.2025"] {
        let parsed = parse_contract_date(text, DateParseMode::Permissive);
        assert_eq!(parsed, Some(march_first_2025()), "failed for {:?}", text);
    }
}

#[test]
fn test_permissive_resolves_ambiguous_dates_day_first() {
    let parsed = parse_contract_date("05/04/2025", DateParseMode::Permissive).unwrap();
    assert_eq!(parsed.day(), 5);
    assert_eq!(parsed.month(), 4);
}

#[test]
fn test_permissive_two_digit_year() {
    let parsed = parse_contract_date("01/03/25", DateParseMode::Permissive).unwrap();
    assert_eq!(parsed.year(), 2025);
    assert_eq!(parsed.month(), 3);
}

#[test]
fn test_permissive_textual_months() {
    for text in ["01 Mar 2025", "1 March 2025", "01/Mar/2025"] {
        let parsed = parse_contract_date(text, DateParseMode::Permissive);
        assert_eq!(parsed, Some(march_first_2025()), "failed for {:?}", text);
    }
}

#[test]
fn test_permissive_accepts_unambiguous_year_first() {
    let parsed = parse_contract_date("2025-03-01", DateParseMode::Permissive).unwrap();
    assert_eq!(parsed.year(), 2025);
    assert_eq!(parsed.month(), 3);
    assert_eq!(parsed.day(), 1);
}

#[test]
fn test_permissive_accepts_datetimes() {
    let with_time = parse_contract_date("01/03/2025 14:30:00", DateParseMode::Permissive).unwrap();
    assert_eq!(with_time.hour(), 14);
    assert_eq!(with_time.minute(), 30);

    let iso = parse_contract_date("2025-03-01T08:15:00", DateParseMode::Permissive).unwrap();
    assert_eq!(iso.hour(), 8);
}

#[test]
fn test_permissive_trims_surrounding_whitespace() {
    let parsed = parse_contract_date("  01/03/2025  ", DateParseMode::Permissive);
    assert_eq!(parsed, Some(march_first_2025()));
}

#[test]
fn test_date_only_inputs_resolve_to_midnight() {
    let parsed = parse_contract_date("15/06/2025", DateParseMode::Permissive).unwrap();
    assert_eq!(parsed.hour(), 0);
    assert_eq!(parsed.minute(), 0);
    assert_eq!(parsed.second(), 0);
}

#[test]
fn test_permissive_rejects_unparseable_text() {
    for text in ["", "   ", "not a date", "32/01/2025", "31/02/2025", "15/13/2025"] {
        assert!(
            parse_contract_date(text, DateParseMode::Permissive).is_none(),
            "unexpectedly parsed {:?}",
            text
        );
    }
}

#[test]
fn test_modes_diverge_on_two_digit_years() {
    // Strict reads the digits as written; permissive applies the usual pivot
    let strict = parse_contract_date("01/03/25", DateParseMode::Strict).unwrap();
    let permissive = parse_contract_date("01/03/25", DateParseMode::Permissive).unwrap();
    assert_eq!(strict.year(), 25);
    assert_eq!(permissive.year(), 2025);
}
