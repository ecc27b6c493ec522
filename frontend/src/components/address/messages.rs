use common::model::place::{PlaceDetails, Suggestion};
use common::search::{PendingSearch, RequestTicket};

#[derive(Clone)]
pub enum Msg {
    QueryChanged(String),
    QuietPeriodElapsed(PendingSearch),
    SuggestionsLoaded {
        ticket: RequestTicket,
        result: Result<Vec<Suggestion>, String>,
    },
    SuggestionSelected(Suggestion),
    DetailsLoaded {
        ticket: RequestTicket,
        display_name: String,
        result: Result<PlaceDetails, String>,
    },
    Verify,
    VerificationFinished(Result<bool, String>),
}
