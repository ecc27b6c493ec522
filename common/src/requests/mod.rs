use serde::{Deserialize, Serialize};

/// Request payload for the suggestion search endpoint.
/// Carries the query text captured when the search was scheduled.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SuggestionsRequest {
    pub query: String,
}
