//! The query submission lifecycle: empty-input guard, busy tracking, and
//! application of gateway outcomes to the view state.

use cutcart_core::{SearchQuery, SearchState};
use cutcart_gateway::{feedback_message, normalize, SearchClient};

/// Error line shown when a submission fails for reasons the service did not
/// explain (network failure, unreadable response).
pub(crate) const GENERIC_SEARCH_ERROR: &str = "Failed to perform search. Please try again.";

/// Owns the [`SearchState`] and drives one submission at a time through the
/// gateway.
///
/// Re-entrant submission is not hard-prevented here; the interactive loop
/// awaits each `submit` before reading the next line, which is the de-facto
/// guard against overlapping requests.
pub(crate) struct SearchSession {
    client: SearchClient,
    state: SearchState,
}

impl SearchSession {
    pub(crate) fn new(client: SearchClient) -> Self {
        Self {
            client,
            state: SearchState::idle(),
        }
    }

    pub(crate) fn state(&self) -> &SearchState {
        &self.state
    }

    /// Submits raw input text.
    ///
    /// Whitespace-only input is a logged no-op: no gateway call, state
    /// unchanged, nothing surfaced to the user. Otherwise exactly one
    /// gateway call is issued with the trimmed text, and the state moves
    /// SUBMITTING → SUCCESS or FAILURE. Both outcome arms produce a
    /// non-busy snapshot, so the busy flag cannot stay stuck.
    pub(crate) async fn submit(&mut self, text: &str) {
        let Some(query) = SearchQuery::new(text) else {
            tracing::warn!("ignoring empty search query");
            return;
        };

        self.state = self.state.submitting(&query);

        self.state = match self.client.search(&query).await {
            Ok(raw) => {
                tracing::info!(query = %query, class = ?raw.classification(), "search completed");
                self.state.succeeded(normalize(&raw), feedback_message(&raw))
            }
            Err(err) => {
                tracing::error!(query = %query, error = %err, "search failed");
                let message = match err.service_message() {
                    Some(message) => message.to_owned(),
                    None => GENERIC_SEARCH_ERROR.to_owned(),
                };
                self.state.failed(message)
            }
        };
    }
}
