use actix_web::{web, HttpResponse};
use common::requests::SuggestionsRequest;
use log::{error, info};

use super::client::PlacesClient;
use super::error::PlacesError;

/// Actix web handler for `POST /api/places/search`.
///
/// Responds with the suggestions for `query`, or an empty array when the
/// places service found nothing.
pub(crate) async fn process(
    request: web::Json<SuggestionsRequest>,
    client: web::Data<PlacesClient>,
) -> Result<HttpResponse, PlacesError> {
    let query = request.into_inner().query;
    if query.trim().is_empty() {
        return Err(PlacesError::InvalidRequest("query must not be empty"));
    }

    match client.search(&query).await {
        Ok(suggestions) => {
            info!("Places search answered with {} suggestions", suggestions.len());
            Ok(HttpResponse::Ok().json(suggestions))
        }
        Err(e) => {
            error!("Error searching places: {}", e);
            Err(e)
        }
    }
}
