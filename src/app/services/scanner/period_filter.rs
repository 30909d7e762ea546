//! Period matching predicates
//!
//! Pure closed-interval checks between a contract period and the filter
//! window. Inverted ranges, on the record or the window side, are evaluated
//! mechanically by the same formulas and never special-cased.

use chrono::NaiveDateTime;

use crate::app::models::FilterWindow;
use crate::config::FilterMode;

/// True when the period touches the window at any point
pub fn period_overlaps(start: NaiveDateTime, end: NaiveDateTime, window: &FilterWindow) -> bool {
    start <= window.end && window.start <= end
}

/// True when the period lies entirely inside the window
pub fn period_contained(start: NaiveDateTime, end: NaiveDateTime, window: &FilterWindow) -> bool {
    start >= window.start && end <= window.end
}

/// Apply the configured matching mode to a contract period
pub fn is_included(
    start: NaiveDateTime,
    end: NaiveDateTime,
    window: &FilterWindow,
    mode: FilterMode,
) -> bool {
    match mode {
        FilterMode::Overlap => period_overlaps(start, end, window),
        FilterMode::Containment => period_contained(start, end, window),
    }
}
