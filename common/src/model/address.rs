//! The structured address shown in the form.

use serde::{Deserialize, Serialize};

use crate::model::place::PlaceDetails;

/// Displayed for name, phone and rating when the place does not provide them.
pub const UNKNOWN: &str = "N/A";

/// Structured address populated from a resolved place.
///
/// Every field is free text and starts empty. A record is always built whole
/// from one `PlaceDetails` response and replaces the previous one; fields are
/// never merged across responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub name: String,
    pub phone: String,
    pub rating: String,
    pub street: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl AddressRecord {
    pub fn from_details(details: &PlaceDetails) -> Self {
        let name = details
            .display_name
            .as_ref()
            .map(|d| d.text.as_str())
            .filter(|text| !text.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string();
        let phone = details
            .international_phone_number
            .as_deref()
            .filter(|phone| !phone.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string();
        // A zero rating is shown as unknown, like a missing one.
        let rating = details
            .rating
            .filter(|rating| *rating != 0.0)
            .map(|rating| rating.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());

        Self {
            name,
            phone,
            rating,
            street: format!(
                "{} {}",
                details.component("street_number"),
                details.component("route")
            ),
            city: details.component("locality").to_string(),
            district: details.component("sublocality").to_string(),
            state: details.component("administrative_area_level_1").to_string(),
            zip: details.component("postal_code").to_string(),
            country: details.component("country").to_string(),
        }
    }

    /// Label and value of each displayed field, in form order.
    pub fn display_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("Business Name", self.name.as_str()),
            ("Street", self.street.as_str()),
            ("City", self.city.as_str()),
            ("District", self.district.as_str()),
            ("State", self.state.as_str()),
            ("ZIP Code", self.zip.as_str()),
            ("Country", self.country.as_str()),
            ("Phone Number", self.phone.as_str()),
            ("Rating", self.rating.as_str()),
        ]
    }
}
