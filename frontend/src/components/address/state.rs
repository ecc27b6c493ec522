//! Component state for the address form.
//!
//! Holds the query text, the suggestion dropdown, the resolved address and
//! the bookkeeping that keeps the asynchronous searches in order.

use common::model::address::AddressRecord;
use common::model::place::{PlaceDetails, Suggestion};
use common::search::{Debounce, RequestSequence, RequestTicket};
use gloo_timers::callback::Timeout;

/// Main state container for the `AddressFormComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct AddressFormComponent {
    /// Text of the search input.
    pub query: String,

    /// Result of the latest applied search, in service order.
    pub suggestions: Vec<Suggestion>,

    /// Whether the dropdown may be shown.
    pub suggestions_open: bool,

    /// Address of the most recently resolved place.
    pub address: AddressRecord,

    /// Keystroke generations; decides whether a fired timer still counts.
    pub debounce: Debounce,

    /// Timer of the pending search. Replacing or clearing it cancels the timer.
    pub debounce_timer: Option<Timeout>,

    pub suggestion_requests: RequestSequence,

    pub detail_requests: RequestSequence,

    /// Set while the dataset is fetched and scanned.
    pub verifying: bool,
}

impl AddressFormComponent {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            suggestions_open: false,
            address: AddressRecord::default(),
            debounce: Debounce::new(),
            debounce_timer: None,
            suggestion_requests: RequestSequence::new(),
            detail_requests: RequestSequence::new(),
            verifying: false,
        }
    }

    /// Drives the spinner: true while any search or detail request is in flight.
    pub fn is_loading(&self) -> bool {
        self.suggestion_requests.is_busy() || self.detail_requests.is_busy()
    }

    pub fn shows_suggestions(&self) -> bool {
        self.suggestions_open && !self.suggestions.is_empty()
    }

    pub fn close_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions_open = false;
    }

    /// Starts a search: clears the list until it answers and hands out its ticket.
    pub fn begin_search(&mut self) -> RequestTicket {
        self.close_suggestions();
        self.suggestion_requests.issue()
    }

    /// Applies a finished search. Stale answers only release the spinner.
    ///
    /// Failures close the dropdown and are handed back for logging.
    pub fn apply_suggestions(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Suggestion>, String>,
    ) -> Result<(), String> {
        if !self.suggestion_requests.complete(ticket) {
            return Ok(());
        }
        match result {
            Ok(suggestions) if !suggestions.is_empty() => {
                self.suggestions = suggestions;
                self.suggestions_open = true;
                Ok(())
            }
            Ok(_) => {
                self.close_suggestions();
                Ok(())
            }
            Err(e) => {
                self.close_suggestions();
                Err(e)
            }
        }
    }

    /// Closes the dropdown, cancels the pending search and makes in-flight
    /// searches stale. Returns the ticket of the detail request to start,
    /// or `None` for a suggestion without id.
    pub fn select(&mut self, suggestion: &Suggestion) -> Option<RequestTicket> {
        self.close_suggestions();
        self.debounce.cancel();
        self.debounce_timer = None;
        self.suggestion_requests.supersede();

        (!suggestion.id.is_empty()).then(|| self.detail_requests.issue())
    }

    /// Applies a finished detail request. On success the address is replaced
    /// whole and the query shows `display_name`; on failure nothing but the
    /// spinner changes and the error is handed back for logging.
    pub fn apply_details(
        &mut self,
        ticket: RequestTicket,
        display_name: String,
        result: Result<PlaceDetails, String>,
    ) -> Result<(), String> {
        if !self.detail_requests.complete(ticket) {
            return Ok(());
        }
        let details = result?;
        self.address = AddressRecord::from_details(&details);
        self.query = display_name;
        Ok(())
    }
}
