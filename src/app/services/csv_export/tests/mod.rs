//! Test utilities for CSV export testing
//!
//! Shared record fixtures used by the writer test module.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::app::models::ContractRecord;


/// Midnight on the given day
pub fn dt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

/// Build a record with the given raw field texts
pub fn record(fields: [&str; 6]) -> ContractRecord {
    ContractRecord {
        name: fields[0].to_string(),
        national_id: fields[1].to_string(),
        state_id: fields[2].to_string(),
        address: fields[3].to_string(),
        period_start_text: fields[4].to_string(),
        period_end_text: fields[5].to_string(),
        period_start: dt(2025, 3, 1),
        period_end: dt(2025, 3, 15),
    }
}
