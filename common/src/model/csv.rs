use serde::{Deserialize, Serialize};

/// Public path of the ZIP/city dataset served with the frontend assets.
pub const ADDRESS_DATASET_PATH: &str = "/GPC-STRT-GEO-SAMPLE-US.csv";

/// A row of the address dataset.
///
/// Columns are matched by header name; any column other than `postcode` and
/// `locality` is ignored. Both are kept as text so leading zeros survive.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CsvAddressRow {
    pub postcode: String,
    pub locality: String,
}

impl CsvAddressRow {
    /// Exact match on the postcode, case-insensitive match on the locality.
    pub fn matches(&self, zip: &str, city: &str) -> bool {
        self.postcode == zip && self.locality.to_lowercase() == city.to_lowercase()
    }
}
