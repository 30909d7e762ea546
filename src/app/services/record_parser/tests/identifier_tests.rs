//! Tests for identifier format validation

use crate::app::services::record_parser::identifiers::{
    is_valid_national_id, is_valid_state_id,
};

#[test]
fn test_valid_national_id() {
    assert!(is_valid_national_id("111.222.333-44"));
    assert!(is_valid_national_id("000.000.000-00"));
    assert!(is_valid_national_id("987.654.321-09"));
}

#[test]
fn test_national_id_requires_punctuation() {
    assert!(!is_valid_national_id("11122233344"));
    assert!(!is_valid_national_id("111222333-44"));
    assert!(!is_valid_national_id("111.222.33344"));
    assert!(!is_valid_national_id("111-222-333.44"));
}

#[test]
fn test_national_id_group_sizes() {
    assert!(!is_valid_national_id("1111.222.333-44"));
    assert!(!is_valid_national_id("11.222.333-44"));
    assert!(!is_valid_national_id("111.222.333-4"));
    assert!(!is_valid_national_id("111.222.333-444"));
}

#[test]
fn test_national_id_rejects_letters() {
    assert!(!is_valid_national_id("abc.def.ghi-jk"));
    assert!(!is_valid_national_id("111.222.333-4x"));
}

#[test]
fn test_national_id_is_not_trimmed() {
    assert!(!is_valid_national_id(" 111.222.333-44"));
    assert!(!is_valid_national_id("111.222.333-44 "));
}

#[test]
fn test_national_id_must_match_in_full() {
    assert!(!is_valid_national_id("x111.222.333-44"));
    assert!(!is_valid_national_id("111.222.333-44x"));
    assert!(!is_valid_national_id(""));
}

#[test]
fn test_valid_state_id() {
    assert!(is_valid_state_id("12.345.678-9"));
    assert!(is_valid_state_id("00.000.000-0"));
}

#[test]
fn test_state_id_requires_punctuation() {
    assert!(!is_valid_state_id("123456789"));
    assert!(!is_valid_state_id("12345.678-9"));
    assert!(!is_valid_state_id("12.345.6789"));
}

#[test]
fn test_state_id_group_sizes() {
    assert!(!is_valid_state_id("123.345.678-9"));
    assert!(!is_valid_state_id("1.345.678-9"));
    assert!(!is_valid_state_id("12.345.678-90"));
}

#[test]
fn test_identifier_shapes_are_distinct() {
    // A national identifier does not pass the state check, and vice versa
    assert!(!is_valid_state_id("111.222.333-44"));
    assert!(!is_valid_national_id("12.345.678-9"));
}
