use actix_web::{web, HttpResponse};
use log::error;

use super::client::PlacesClient;
use super::error::PlacesError;

/// Actix web handler for `GET /api/places/{place_id}`.
///
/// Passes the place details through unchanged; the browser extracts the
/// address components itself.
pub(crate) async fn process(
    place_id: web::Path<String>,
    client: web::Data<PlacesClient>,
) -> Result<HttpResponse, PlacesError> {
    let place_id = place_id.into_inner();
    if place_id.trim().is_empty() {
        return Err(PlacesError::InvalidRequest("place id must not be empty"));
    }

    match client.details(&place_id).await {
        Ok(details) => Ok(HttpResponse::Ok().json(details)),
        Err(e) => {
            error!("Error fetching details for place '{}': {}", place_id, e);
            Err(e)
        }
    }
}
