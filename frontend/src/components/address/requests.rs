//! Browser-side calls to the places proxy and the address dataset.
//!
//! Every helper resolves to an explicit `Result`; non-2xx answers become
//! `gloo_net::Error::GlooError` so callers handle one error type.

use common::model::place::{PlaceDetails, Suggestion};
use common::requests::SuggestionsRequest;
use common::verify;
use gloo_net::http::{Request, Response};
use gloo_net::Error;

fn ensure_ok(response: Response) -> Result<Response, Error> {
    if response.ok() {
        Ok(response)
    } else {
        Err(Error::GlooError(format!(
            "{} answered {} {}",
            response.url(),
            response.status(),
            response.status_text()
        )))
    }
}

/// `POST {api_path}/search` with the query captured when the search was scheduled.
pub async fn fetch_suggestions(api_path: &str, query: String) -> Result<Vec<Suggestion>, Error> {
    let response = Request::post(&format!("{}/search", api_path))
        .json(&SuggestionsRequest { query })?
        .send()
        .await?;
    ensure_ok(response)?.json().await
}

/// `GET {api_path}/{place_id}`.
pub async fn fetch_place_details(api_path: &str, place_id: &str) -> Result<PlaceDetails, Error> {
    let place_id = String::from(js_sys::encode_uri_component(place_id));
    let response = Request::get(&format!("{}/{}", api_path, place_id))
        .send()
        .await?;
    ensure_ok(response)?.json().await
}

async fn fetch_dataset(dataset_path: &str) -> Result<String, Error> {
    let response = Request::get(dataset_path).send().await?;
    ensure_ok(response)?.text().await
}

/// Fetches the dataset and looks for a row matching `zip` and `city`.
///
/// The dataset is downloaded and parsed on every call. Fetch and parse
/// failures are returned, not swallowed: the caller reports them.
pub async fn verify_address(dataset_path: &str, zip: &str, city: &str) -> Result<bool, String> {
    let dataset = fetch_dataset(dataset_path)
        .await
        .map_err(|e| e.to_string())?;
    verify::verify_address(&dataset, zip, city).map_err(|e| e.to_string())
}
