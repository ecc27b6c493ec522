use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Failures of the places proxy, each mapped to the status returned to the browser.
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("places API key is not configured")]
    MissingApiKey,

    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error("invalid places URL: {0}")]
    InvalidUrl(String),

    #[error("places request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("places service answered {status}: {body}")]
    Upstream { status: u16, body: String },
}

impl ResponseError for PlacesError {
    fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            PlacesError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PlacesError::InvalidUrl(_) | PlacesError::Transport(_) | PlacesError::Upstream { .. } => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Upstream bodies may echo request details; the browser only gets the category.
        let message = match self {
            PlacesError::Upstream { status, .. } => format!("places service answered {}", status),
            PlacesError::Transport(_) => "places service unreachable".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).body(message)
    }
}
