//! Defines the properties for the `AddressFormComponent`.

use common::model::csv::ADDRESS_DATASET_PATH;
use yew::prelude::*;

/// Base path of the places proxy served by the backend.
pub const PLACES_API_PATH: &str = "/api/places";

/// Properties for the `AddressFormComponent`.
///
/// Both paths are resolved against the page origin. The defaults match the
/// routes and assets of the bundled backend, so the form is normally mounted
/// without any properties.
#[derive(Properties, PartialEq, Clone)]
pub struct AddressFormProps {
    /// Base path of the places proxy (`{api_path}/search`, `{api_path}/{place_id}`).
    #[prop_or(AttrValue::Static(PLACES_API_PATH))]
    pub api_path: AttrValue,

    /// Path of the ZIP/city CSV dataset, fetched again on every verification.
    #[prop_or(AttrValue::Static(ADDRESS_DATASET_PATH))]
    pub dataset_path: AttrValue,
}
