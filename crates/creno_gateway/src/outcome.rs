// --- File: crates/creno_gateway/src/outcome.rs ---

/// Outcome of a read-only fetch against the booking API.
///
/// `Failed` covers transport errors, non-2xx statuses and undecodable
/// bodies, all absorbed at the gateway. A successful call with no data is
/// `Fetched` of an empty collection; the two must never be conflated. One
/// means "could not determine what to show", the other "nothing to show".
/// The third state of a fetch lifecycle, not-yet-fetched, lives in the
/// catalog cache rather than here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Failed,
    Fetched(T),
}

impl<T> FetchOutcome<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed)
    }

    /// Converts to `Option`, discarding the failure/empty distinction.
    /// Callers that care about the distinction must match instead.
    pub fn fetched(self) -> Option<T> {
        match self {
            FetchOutcome::Failed => None,
            FetchOutcome::Fetched(value) => Some(value),
        }
    }
}
