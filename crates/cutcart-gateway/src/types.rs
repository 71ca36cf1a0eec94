//! Wire types for the search service's response envelope.
//!
//! ## Observed response shapes
//!
//! Two incompatible success schemas exist in the wild and both must be
//! supported indefinitely:
//!
//! ### `results` variant
//! `{ "results": ["Milk 2%", ...], "message": "1 match" }`: an array of
//! plain display strings. A plain name is not a serialized record, so these
//! entries normalize to the sentinel unless a string happens to hold a JSON
//! object.
//!
//! ### `products` variant
//! `{ "products": [ {..}, "{\"productId\":...}" ], "message": "..." }`: an
//! array mixing structured objects and JSON-serialized text forms of the
//! same record shape. Field names inside an entry are the service's:
//! `productId`, `name`, `brand`, `price`, `imageUrl`, `storeId`.
//!
//! When both arrays are present, `products` wins; it is the richer shape
//! and the one the current service emits. Entries stay as
//! [`serde_json::Value`] here; interpretation happens entirely in
//! [`crate::normalize`].
//!
//! ### `message`
//! Optional human-readable text, present on both success and failure bodies
//! (e.g. `"Products fetched and stored successfully."`, `"service down"`).
//! It is informational, not an error flag.

use serde::Deserialize;

/// Untyped success payload from the search service.
///
/// Transient: consumed entirely by [`crate::normalize`] and never retained.
#[derive(Debug, Default, Deserialize)]
pub struct RawLookupResponse {
    /// Legacy shape: plain display strings.
    #[serde(default)]
    pub results: Option<Vec<String>>,

    /// Current shape: structured records or serialized-text forms of them.
    #[serde(default)]
    pub products: Option<Vec<serde_json::Value>>,

    /// Optional human-readable feedback text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome classification of a parsed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// At least one raw entry was returned.
    Matches(usize),
    /// No entries, but the service explained itself in `message`.
    MessageOnly,
    /// No entries and no message.
    Empty,
}

impl RawLookupResponse {
    /// Number of raw entries in whichever array is present.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        match (&self.products, &self.results) {
            (Some(products), _) => products.len(),
            (None, Some(results)) => results.len(),
            (None, None) => 0,
        }
    }

    /// Classifies the response as full success, partial success (service
    /// message with no entries), or empty.
    #[must_use]
    pub fn classification(&self) -> ResponseClass {
        match self.entry_count() {
            0 => {
                if self.message.as_deref().is_some_and(|m| !m.is_empty()) {
                    ResponseClass::MessageOnly
                } else {
                    ResponseClass::Empty
                }
            }
            n => ResponseClass::Matches(n),
        }
    }
}
