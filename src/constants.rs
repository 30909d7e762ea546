//! Application constants for the contract filter
//!
//! This module contains the row layout, identifier patterns, date formats,
//! and default values used throughout the contract filter application.

// =============================================================================
// Contract Row Layout
// =============================================================================

/// Number of fields in a well-formed contract row
pub const CONTRACT_FIELD_COUNT: usize = 6;

/// Field positions within a contract row
pub mod fields {
    pub const NAME: usize = 0;
    pub const NATIONAL_ID: usize = 1;
    pub const STATE_ID: usize = 2;
    pub const ADDRESS: usize = 3;
    pub const PERIOD_START: usize = 4;
    pub const PERIOD_END: usize = 5;
}

/// Column labels used when previewing accepted rows
pub const PREVIEW_COLUMN_LABELS: [&str; CONTRACT_FIELD_COUNT] = [
    "Name",
    "National ID",
    "State ID",
    "Address",
    "Period Start",
    "Period End",
];

// =============================================================================
// Identifier Formats
// =============================================================================

/// National identifier format: three dot-separated groups of three digits,
/// a hyphen, and a two-digit suffix (e.g. `111.222.333-44`)
pub const NATIONAL_ID_PATTERN: &str = r"^\d{3}\.\d{3}\.\d{3}-\d{2}$";

/// State identifier format: two digits, two dot-separated groups of three
/// digits, a hyphen, and a single-digit suffix (e.g. `12.345.678-9`)
pub const STATE_ID_PATTERN: &str = r"^\d{2}\.\d{3}\.\d{3}-\d$";

// =============================================================================
// Date Formats
// =============================================================================

/// The only format accepted in strict date-parsing mode
pub const STRICT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Day-first date formats tried in permissive mode, in order.
/// Two-digit years come first so `01/03/25` resolves to 2025, not year 25.
pub const DAY_FIRST_DATE_FORMATS: &[&str] = &[
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%d/%b/%Y",
    "%d-%b-%Y",
];

/// Day-first datetime formats tried in permissive mode
pub const DAY_FIRST_DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

/// Unambiguous year-first date formats tried in permissive mode
pub const YEAR_FIRST_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Unambiguous year-first datetime formats tried in permissive mode
pub const YEAR_FIRST_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Formats accepted for window bounds on the command line
pub const CLI_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

// =============================================================================
// Scan and Diagnostics
// =============================================================================

/// Maximum number of entries retained in the diagnostic log
pub const DIAGNOSTIC_LOG_CAP: usize = 15;

// =============================================================================
// Preview and Output Defaults
// =============================================================================

/// Default number of accepted rows shown in the preview table
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Smallest allowed preview row count
pub const PREVIEW_ROWS_MIN: usize = 1;

/// Largest allowed preview row count
pub const PREVIEW_ROWS_MAX: usize = 100;

/// Output filename used when none is given on the command line
pub const DEFAULT_OUTPUT_FILENAME: &str = "contracts_filtered.csv";

// =============================================================================
// Helper Functions
// =============================================================================

/// Calendar year used for the default filter window
pub fn default_window_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_bounds_are_ordered() {
        assert!(PREVIEW_ROWS_MIN <= DEFAULT_PREVIEW_ROWS);
        assert!(DEFAULT_PREVIEW_ROWS <= PREVIEW_ROWS_MAX);
    }

    #[test]
    fn test_preview_labels_cover_every_field() {
        assert_eq!(PREVIEW_COLUMN_LABELS.len(), CONTRACT_FIELD_COUNT);
        assert_eq!(PREVIEW_COLUMN_LABELS[fields::NAME], "Name");
        assert_eq!(PREVIEW_COLUMN_LABELS[fields::PERIOD_END], "Period End");
    }

    #[test]
    fn test_strict_format_is_also_tried_in_permissive_mode() {
        assert!(DAY_FIRST_DATE_FORMATS.contains(&STRICT_DATE_FORMAT));
    }

    #[test]
    fn test_two_digit_year_formats_come_before_four_digit() {
        let two = DAY_FIRST_DATE_FORMATS
            .iter()
            .position(|f| *f == "%d/%m/%y")
            .unwrap();
        let four = DAY_FIRST_DATE_FORMATS
            .iter()
            .position(|f| *f == "%d/%m/%Y")
            .unwrap();
        assert!(two < four);
    }

    #[test]
    fn test_default_window_year_is_plausible() {
        let year = default_window_year();
        assert!((2000..=3000).contains(&year));
    }
}
