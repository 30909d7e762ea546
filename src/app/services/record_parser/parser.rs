//! Row-to-record parsing for contract CSV data
//!
//! Validation order is fixed: field count, then identifier formats, then
//! period dates. Short or long rows never reach the identifier or date
//! checks. Field texts are carried into the record untouched so accepted
//! rows can be re-encoded byte-for-byte.

use csv::StringRecord;

use crate::app::models::{ContractRecord, RejectReason};
use crate::config::DateParseMode;
use crate::constants::{CONTRACT_FIELD_COUNT, fields};

use super::dates::parse_contract_date;
use super::identifiers::{is_valid_national_id, is_valid_state_id};

/// Parse a CSV row into a validated contract record
pub fn parse_contract_row(
    row: &StringRecord,
    date_parsing: DateParseMode,
) -> Result<ContractRecord, RejectReason> {
    if row.len() != CONTRACT_FIELD_COUNT {
        return Err(RejectReason::MalformedRow { found: row.len() });
    }

    let name = &row[fields::NAME];
    let national_id = &row[fields::NATIONAL_ID];
    let state_id = &row[fields::STATE_ID];
    let address = &row[fields::ADDRESS];
    let period_start_text = &row[fields::PERIOD_START];
    let period_end_text = &row[fields::PERIOD_END];

    if !is_valid_national_id(national_id) || !is_valid_state_id(state_id) {
        return Err(RejectReason::InvalidIdentifier);
    }

    let period_start =
        parse_contract_date(period_start_text, date_parsing).ok_or(RejectReason::InvalidDate)?;
    let period_end =
        parse_contract_date(period_end_text, date_parsing).ok_or(RejectReason::InvalidDate)?;

    Ok(ContractRecord {
        name: name.to_string(),
        national_id: national_id.to_string(),
        state_id: state_id.to_string(),
        address: address.to_string(),
        period_start_text: period_start_text.to_string(),
        period_end_text: period_end_text.to_string(),
        period_start,
        period_end,
    })
}
