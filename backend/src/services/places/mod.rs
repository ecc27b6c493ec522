//! Server-side proxy for the places service.
//!
//! The browser never sees the API key: it calls these routes, and the
//! `PlacesClient` shared through `web::Data` adds the credential before
//! forwarding to the places service.
//!
//! The provided routes are:
//! - `POST /api/places/search`: body `{"query": "..."}`. Runs a text search in
//!   English restricted to id, display name and formatted address, and
//!   answers with a JSON array of `Suggestion`s (empty when nothing matched).
//!
//! - `GET /api/places/{place_id}`: answers with the `PlaceDetails` of one
//!   place, including phone, rating, location and address components.
//!
//! Failures map to `503` (no API key configured), `400` (empty query or id)
//! and `502` (places service unreachable, erroring or answering garbage).

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod client;
mod details;
mod error;
mod search;

pub use client::PlacesClient;

const API_PATH: &str = "/api/places";

/// Configures and returns the Actix scope for the places proxy routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Suggestions for the autocomplete dropdown.
        .route("/search", post().to(search::process))
        // Full details of the selected place.
        .route("/{place_id}", get().to(details::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlacesConfig;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpRequest, HttpResponse, HttpServer};
    use common::model::place::{
        PlaceDetails, SearchTextRequest, Suggestion, DETAILS_FIELDS, SEARCH_FIELD_MASK,
    };
    use common::requests::SuggestionsRequest;
    use serde::Deserialize;
    use serde_json::json;
    use std::time::Duration;

    const TEST_KEY: &str = "test-key";

    fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
        req.headers().get(name).and_then(|v| v.to_str().ok())
    }

    async fn fake_search(req: HttpRequest, body: web::Json<SearchTextRequest>) -> HttpResponse {
        if header(&req, "X-Goog-Api-Key") != Some(TEST_KEY)
            || header(&req, "X-Goog-FieldMask") != Some(SEARCH_FIELD_MASK)
        {
            return HttpResponse::Forbidden().finish();
        }
        if body.language_code != "en" {
            return HttpResponse::BadRequest().finish();
        }

        match body.text_query.as_str() {
            "nowhere" => HttpResponse::Ok().json(json!({})),
            "boom" => HttpResponse::InternalServerError().body("upstream exploded"),
            "garbage" => HttpResponse::Ok().body("not json"),
            _ => HttpResponse::Ok().json(json!({
                "places": [
                    {
                        "id": "ChIJ-springfield",
                        "displayName": {"text": "Springfield", "languageCode": "en"},
                        "formattedAddress": "Springfield, IL, USA"
                    },
                    {
                        "id": "ChIJ-springfield-mo",
                        "displayName": {"text": "Springfield"},
                        "formattedAddress": "Springfield, MO, USA"
                    }
                ]
            })),
        }
    }

    #[derive(Deserialize)]
    struct DetailsQuery {
        fields: String,
        key: String,
    }

    async fn fake_details(
        place_id: web::Path<String>,
        query: web::Query<DetailsQuery>,
    ) -> HttpResponse {
        if query.key != TEST_KEY || query.fields != DETAILS_FIELDS {
            return HttpResponse::Forbidden().finish();
        }
        if place_id.as_str() != "ChIJ-springfield" {
            return HttpResponse::NotFound().finish();
        }

        HttpResponse::Ok().json(json!({
            "id": "ChIJ-springfield",
            "displayName": {"text": "Springfield"},
            "formattedAddress": "Springfield, IL 62704, USA",
            "rating": 4.2,
            "location": {"latitude": 39.78, "longitude": -89.65},
            "addressComponents": [
                {"types": ["locality", "political"], "longText": "Springfield"},
                {"types": ["postal_code"], "longText": "62704"}
            ]
        }))
    }

    /// Starts a stand-in for the places service and returns its base URL.
    fn start_upstream() -> String {
        let server = HttpServer::new(|| {
            App::new()
                .route("/v1/places:searchText", web::post().to(fake_search))
                .route("/v1/places/{place_id}", web::get().to(fake_details))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}", addr)
    }

    fn places_config(base: &str, api_key: Option<&str>) -> PlacesConfig {
        PlacesConfig {
            api_key: api_key.map(str::to_string),
            search_url: format!("{}/v1/places:searchText", base),
            details_url: format!("{}/v1/places", base),
            timeout: Duration::from_secs(5),
        }
    }

    async fn call(config: PlacesConfig, req: test::TestRequest) -> actix_web::dev::ServiceResponse {
        let client = PlacesClient::new(config).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client))
                .service(configure_routes()),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    fn search(query: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/places/search")
            .set_json(SuggestionsRequest {
                query: query.to_string(),
            })
    }

    #[actix_web::test]
    async fn search_returns_suggestions() {
        let base = start_upstream();
        let resp = call(places_config(&base, Some(TEST_KEY)), search("springfield")).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let suggestions: Vec<Suggestion> = test::read_body_json(resp).await;
        assert_eq!(
            suggestions,
            vec![
                Suggestion {
                    id: "ChIJ-springfield".to_string(),
                    display_name: "Springfield".to_string(),
                    formatted_address: "Springfield, IL, USA".to_string(),
                },
                Suggestion {
                    id: "ChIJ-springfield-mo".to_string(),
                    display_name: "Springfield".to_string(),
                    formatted_address: "Springfield, MO, USA".to_string(),
                },
            ]
        );
    }

    #[actix_web::test]
    async fn search_without_places_is_an_empty_list() {
        let base = start_upstream();
        let resp = call(places_config(&base, Some(TEST_KEY)), search("nowhere")).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let suggestions: Vec<Suggestion> = test::read_body_json(resp).await;
        assert!(suggestions.is_empty());
    }

    #[actix_web::test]
    async fn search_upstream_error_is_bad_gateway() {
        let base = start_upstream();
        let resp = call(places_config(&base, Some(TEST_KEY)), search("boom")).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn search_undecodable_body_is_bad_gateway() {
        let base = start_upstream();
        let resp = call(places_config(&base, Some(TEST_KEY)), search("garbage")).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn search_with_wrong_key_is_bad_gateway() {
        let base = start_upstream();
        let resp = call(places_config(&base, Some("other-key")), search("springfield")).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn empty_query_is_rejected() {
        let base = start_upstream();
        let resp = call(places_config(&base, Some(TEST_KEY)), search("   ")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn missing_api_key_is_service_unavailable() {
        let base = start_upstream();
        let resp = call(places_config(&base, None), search("springfield")).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn unreachable_service_is_bad_gateway() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let base = format!("http://127.0.0.1:{}", port);
        let resp = call(places_config(&base, Some(TEST_KEY)), search("springfield")).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn details_are_passed_through() {
        let base = start_upstream();
        let req = test::TestRequest::get().uri("/api/places/ChIJ-springfield");
        let resp = call(places_config(&base, Some(TEST_KEY)), req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let details: PlaceDetails = test::read_body_json(resp).await;
        assert_eq!(details.id.as_deref(), Some("ChIJ-springfield"));
        assert_eq!(details.rating, Some(4.2));
        assert_eq!(details.component("postal_code"), "62704");
        assert_eq!(details.component("locality"), "Springfield");
    }

    #[actix_web::test]
    async fn unknown_place_is_bad_gateway() {
        let base = start_upstream();
        let req = test::TestRequest::get().uri("/api/places/unknown");
        let resp = call(places_config(&base, Some(TEST_KEY)), req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
