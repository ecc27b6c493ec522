//! Keystroke debouncing and request ordering for the suggestion search.
//!
//! Neither type owns a timer or performs I/O. The frontend pairs `Debounce`
//! with a cancellable timeout and `RequestSequence` with its async requests;
//! both only decide whether a fired timer or a finished request still counts.

/// Queries must be longer than this many characters to be searched.
pub const MIN_QUERY_CHARS: usize = 3;

/// Quiet period after the last keystroke before a search is issued.
pub const DEBOUNCE_MS: u32 = 500;

/// Whether `query` is long enough to search for.
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

/// A search scheduled by a keystroke, carrying the text typed at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    generation: u64,
    pub query: String,
}

/// Tracks keystrokes so only the last scheduled search survives its quiet period.
#[derive(Debug, Default)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a keystroke, invalidating every earlier `PendingSearch`.
    ///
    /// Returns the search to schedule, or `None` when the query is too short.
    pub fn schedule(&mut self, query: &str) -> Option<PendingSearch> {
        self.generation += 1;
        is_searchable(query).then(|| PendingSearch {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Invalidates the pending search without scheduling a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Called when the quiet period of `pending` has elapsed. Yields the
    /// query to fetch if no keystroke happened in between.
    pub fn fire(&self, pending: PendingSearch) -> Option<String> {
        (pending.generation == self.generation).then_some(pending.query)
    }
}

/// Sequence number handed out with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Issues request tickets and tells stale responses apart from the latest one.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
    in_flight: usize,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request. Every ticket issued earlier becomes stale.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        self.in_flight += 1;
        RequestTicket(self.latest)
    }

    /// Marks a request finished, successful or not.
    ///
    /// Returns `true` if its response is current and may be applied.
    pub fn complete(&mut self, ticket: RequestTicket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        ticket.0 == self.latest
    }

    /// Makes every outstanding ticket stale without starting a request.
    pub fn supersede(&mut self) {
        self.latest += 1;
    }

    /// Whether any issued request has not completed yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_are_never_scheduled() {
        let mut debounce = Debounce::new();
        assert_eq!(debounce.schedule(""), None);
        assert_eq!(debounce.schedule("a"), None);
        assert_eq!(debounce.schedule("ab"), None);
        assert!(debounce.schedule("abc").is_some());
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        assert!(!is_searchable("åä"));
        assert!(is_searchable("åäö"));
    }

    #[test]
    fn rapid_keystrokes_fetch_once_with_final_text() {
        let mut debounce = Debounce::new();
        let pending: Vec<PendingSearch> = ["spr", "spri", "sprin", "spring"]
            .iter()
            .filter_map(|q| debounce.schedule(q))
            .collect();

        let fired: Vec<String> = pending
            .into_iter()
            .filter_map(|p| debounce.fire(p))
            .collect();

        assert_eq!(fired, vec!["spring".to_string()]);
    }

    #[test]
    fn dropping_below_threshold_cancels_pending_search() {
        let mut debounce = Debounce::new();
        let pending = debounce.schedule("spr").unwrap();
        assert_eq!(debounce.schedule("sp"), None);
        assert_eq!(debounce.fire(pending), None);
    }

    #[test]
    fn cancel_invalidates_pending_search() {
        let mut debounce = Debounce::new();
        let pending = debounce.schedule("springfield").unwrap();
        debounce.cancel();
        assert_eq!(debounce.fire(pending), None);
    }

    #[test]
    fn pending_search_keeps_text_from_schedule_time() {
        let mut debounce = Debounce::new();
        let pending = debounce.schedule("springfield").unwrap();
        assert_eq!(debounce.fire(pending), Some("springfield".to_string()));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut requests = RequestSequence::new();
        let older = requests.issue();
        let newer = requests.issue();

        assert!(requests.complete(newer));
        assert!(!requests.complete(older));
        assert!(!requests.is_busy());
    }

    #[test]
    fn busy_until_every_request_completes() {
        let mut requests = RequestSequence::new();
        let first = requests.issue();
        let second = requests.issue();
        assert!(requests.is_busy());

        requests.complete(first);
        assert!(requests.is_busy());
        requests.complete(second);
        assert!(!requests.is_busy());
    }

    #[test]
    fn supersede_makes_outstanding_tickets_stale() {
        let mut requests = RequestSequence::new();
        let ticket = requests.issue();
        requests.supersede();

        assert!(!requests.complete(ticket));
        assert!(!requests.is_busy());

        let next = requests.issue();
        assert!(requests.complete(next));
    }
}
