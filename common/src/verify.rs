//! ZIP/city verification against the address dataset.
//!
//! The dataset is parsed from scratch on every call and scanned linearly;
//! the first matching row ends the scan.

use thiserror::Error;

use crate::model::csv::CsvAddressRow;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// The dataset could not be parsed, or lacks a `postcode`/`locality` column.
    #[error("invalid address dataset: {0}")]
    Dataset(#[from] csv::Error),
}

/// Returns `true` when some row of `dataset` has `postcode == zip` and a
/// `locality` equal to `city` ignoring case.
pub fn verify_address(dataset: &str, zip: &str, city: &str) -> Result<bool, VerifyError> {
    let dataset = dataset.strip_prefix('\u{feff}').unwrap_or(dataset);
    // Row lengths are checked by deserializing against the header, after
    // whitespace-only lines are skipped.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(dataset.as_bytes());
    let headers = reader.headers()?.clone();

    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let row: CsvAddressRow = record.deserialize(Some(&headers))?;
        if row.matches(zip, city) {
            return Ok(true);
        }
    }
    Ok(false)
}
