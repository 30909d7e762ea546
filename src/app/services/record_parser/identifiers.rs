//! Identifier format validation
//!
//! Format-only checks for the two identifier fields. There is no checksum
//! arithmetic: a value passes when its shape matches exactly, with no
//! trimming or normalization beforehand.

use regex::Regex;
use std::sync::OnceLock;

use crate::constants::{NATIONAL_ID_PATTERN, STATE_ID_PATTERN};

/// Check a national identifier (`NNN.NNN.NNN-NN`)
pub fn is_valid_national_id(value: &str) -> bool {
    static NATIONAL_ID_RE: OnceLock<Regex> = OnceLock::new();
    let regex = NATIONAL_ID_RE
        .get_or_init(|| Regex::new(NATIONAL_ID_PATTERN).expect("national id regex compiles"));
    regex.is_match(value)
}

/// Check a state identifier (`NN.NNN.NNN-N`)
pub fn is_valid_state_id(value: &str) -> bool {
    static STATE_ID_RE: OnceLock<Regex> = OnceLock::new();
    let regex =
        STATE_ID_RE.get_or_init(|| Regex::new(STATE_ID_PATTERN).expect("state id regex compiles"));
    regex.is_match(value)
}
