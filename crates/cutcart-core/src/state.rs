use crate::products::ProductRecord;
use crate::query::SearchQuery;

/// Feedback line shown when a submission fails; the specific cause goes to
/// the error field and the log, not here.
pub const FAILURE_FEEDBACK: &str = "Error fetching results.";

/// Immutable snapshot of the search view's state.
///
/// Each lifecycle transition (`submitting` → `succeeded` / `failed`)
/// produces a fresh snapshot rather than mutating in place; the session
/// owning the state swaps snapshots wholesale, so a half-applied transition
/// is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    /// Text of the most recently submitted query.
    pub query: String,
    /// `true` while a submission is in flight.
    pub busy: bool,
    /// Service-supplied informational text, shown regardless of outcome.
    pub feedback: String,
    /// User-facing error line from the last submission, if it failed.
    pub error: Option<String>,
    /// Ordered results of the last completed submission.
    pub records: Vec<ProductRecord>,
}

impl SearchState {
    /// The initial state: nothing submitted, nothing to show.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Enters the in-flight state for `query`.
    ///
    /// Previous results stay visible while the request is pending; only a
    /// completed outcome replaces or clears them. A prior error is cleared
    /// immediately so a stale failure line never sits next to a fresh
    /// submission.
    #[must_use]
    pub fn submitting(&self, query: &SearchQuery) -> Self {
        Self {
            query: query.as_str().to_owned(),
            busy: true,
            feedback: self.feedback.clone(),
            error: None,
            records: self.records.clone(),
        }
    }

    /// Applies a successful outcome: results replaced, feedback set, error
    /// cleared, busy released.
    #[must_use]
    pub fn succeeded(&self, records: Vec<ProductRecord>, feedback: String) -> Self {
        Self {
            query: self.query.clone(),
            busy: false,
            feedback,
            error: None,
            records,
        }
    }

    /// Applies a failed outcome: results cleared, generic feedback line,
    /// error message set, busy released.
    #[must_use]
    pub fn failed(&self, error: String) -> Self {
        Self {
            query: self.query.clone(),
            busy: false,
            feedback: FAILURE_FEEDBACK.to_owned(),
            error: Some(error),
            records: Vec::new(),
        }
    }
}
