//! Accepted-row CSV writing
//!
//! Rows are emitted comma-delimited with `\n` terminators and no header
//! row, matching the input format. Dates and identifiers are written
//! exactly as they were read: a field accepted as `1/3/2025` comes out as
//! `1/3/2025`.

use std::path::Path;

use tracing::debug;

use crate::app::models::ContractRecord;
use crate::{Error, Result};

/// Encode accepted records to CSV text
///
/// An empty slice encodes to the empty string.
pub fn encode_records(records: &[ContractRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in records {
        writer.write_record(record.raw_fields())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::csv(format!("Failed to finish CSV encoding: {}", e), None))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::decode("Encoded CSV is not valid UTF-8", e.utf8_error()))
}

/// Write accepted records to a CSV file
///
/// Returns the number of bytes written, for the run report. The file is
/// created (or truncated) even when there are no records.
pub fn write_records(path: &Path, records: &[ContractRecord]) -> Result<u64> {
    let text = encode_records(records)?;

    std::fs::write(path, &text).map_err(|e| {
        Error::io(format!("Failed to write output file {}", path.display()), e)
    })?;

    debug!(
        "Wrote {} records ({} bytes) to {}",
        records.len(),
        text.len(),
        path.display()
    );

    Ok(text.len() as u64)
}
