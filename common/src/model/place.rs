//! Wire types of the places service.
//!
//! Field names follow the service's camelCase JSON. Every field the service
//! may omit is optional so a sparse response still decodes; the proxy passes
//! `PlaceDetails` through to the browser unchanged.

use serde::{Deserialize, Serialize};

/// Language requested for every search.
pub const LANGUAGE_CODE: &str = "en";

/// Response fields requested from the text search endpoint.
pub const SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress";

/// Fields requested from the details endpoint.
pub const DETAILS_FIELDS: &str = "id,displayName,formattedAddress,internationalPhoneNumber,rating,location,adrFormatAddress,addressComponents";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// Body of a text search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest {
    pub text_query: String,
    pub language_code: String,
}

impl SearchTextRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            text_query: query.into(),
            language_code: LANGUAGE_CODE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// Response of a text search. `places` is absent when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Option<Vec<Place>>,
}

impl SearchTextResponse {
    /// Flattens the response into dropdown entries, in service order.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.places
            .unwrap_or_default()
            .into_iter()
            .map(Suggestion::from)
            .collect()
    }
}

/// One entry of the suggestion dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub display_name: String,
    pub formatted_address: String,
}

impl From<Place> for Suggestion {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            display_name: place.display_name.map(|d| d.text).unwrap_or_default(),
            formatted_address: place.formatted_address.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponent {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub long_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Full record of a single place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adr_format_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_components: Option<Vec<AddressComponent>>,
}

impl PlaceDetails {
    /// Long text of the first component tagged with `component_type`, or `""`.
    pub fn component(&self, component_type: &str) -> &str {
        self.address_components
            .iter()
            .flatten()
            .find(|c| c.types.iter().any(|t| t == component_type))
            .map(|c| c.long_text.as_str())
            .unwrap_or("")
    }
}
