use common::model::place::{
    PlaceDetails, SearchTextRequest, SearchTextResponse, Suggestion, DETAILS_FIELDS,
    SEARCH_FIELD_MASK,
};
use log::debug;
use reqwest::{Client, Response, Url};

use super::error::PlacesError;
use crate::config::PlacesConfig;

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Calls the places service on behalf of the browser, holding the API key.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct PlacesClient {
    http: Client,
    config: PlacesConfig,
}

impl PlacesClient {
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn api_key(&self) -> Result<&str, PlacesError> {
        self.config.api_key.as_deref().ok_or(PlacesError::MissingApiKey)
    }

    /// Text search restricted to id, display name and formatted address.
    pub async fn search(&self, query: &str) -> Result<Vec<Suggestion>, PlacesError> {
        let api_key = self.api_key()?;
        debug!("Searching places for '{}'", query);

        let response = self
            .http
            .post(&self.config.search_url)
            .header(API_KEY_HEADER, api_key)
            .header(FIELD_MASK_HEADER, SEARCH_FIELD_MASK)
            .json(&SearchTextRequest::new(query))
            .send()
            .await?;

        let body: SearchTextResponse = ensure_success(response).await?.json().await?;
        Ok(body.into_suggestions())
    }

    /// Details of a single place, with the address components.
    pub async fn details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let api_key = self.api_key()?;
        let url = self.details_url(place_id)?;
        debug!("Fetching details for place '{}'", place_id);

        let response = self
            .http
            .get(url)
            .query(&[("fields", DETAILS_FIELDS), ("key", api_key)])
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// `{details_url}/{place_id}`, with the id percent-encoded as one path segment.
    fn details_url(&self, place_id: &str) -> Result<Url, PlacesError> {
        let mut url = Url::parse(&self.config.details_url)
            .map_err(|e| PlacesError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| PlacesError::InvalidUrl(self.config.details_url.clone()))?
            .pop_if_empty()
            .push(place_id);
        Ok(url)
    }
}

async fn ensure_success(response: Response) -> Result<Response, PlacesError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(PlacesError::Upstream {
        status: status.as_u16(),
        body,
    })
}
