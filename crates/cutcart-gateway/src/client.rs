//! HTTP client for the product lookup service.
//!
//! Wraps `reqwest` with the service's wire contract: one JSON-bodied POST
//! per submission, typed classification of non-2xx responses, and no
//! retries. Retry policy, if any, belongs to the caller.

use reqwest::{Client, Url};
use serde::Serialize;

use cutcart_core::SearchQuery;

use crate::error::LookupError;
use crate::types::RawLookupResponse;

/// User-facing fallback when the service fails without explaining itself.
pub const FALLBACK_SERVICE_MESSAGE: &str = "Failed to connect to search service.";

/// Request body for the search endpoint: `{ "query": "<text>" }`.
#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// Client for the product lookup service.
///
/// Use [`SearchClient::new`] for production or [`SearchClient::with_endpoint`]
/// to point at a mock server in tests.
#[derive(Debug)]
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self, LookupError> {
        Self::with_endpoint(user_agent, cutcart_core::DEFAULT_ENDPOINT)
    }

    /// Creates a client with a custom endpoint (for testing with wiremock,
    /// or the `CUTCART_ENDPOINT` override).
    ///
    /// No request timeout is configured; requests run on the transport
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(user_agent: &str, endpoint: &str) -> Result<Self, LookupError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        let endpoint = Url::parse(endpoint).map_err(|e| LookupError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, endpoint })
    }

    /// Submits one query and returns the parsed envelope.
    ///
    /// A single attempt per call; any 2xx body is parsed as
    /// [`RawLookupResponse`].
    ///
    /// # Errors
    ///
    /// - [`LookupError::Service`] on a non-2xx status, carrying the body's
    ///   `message` field when present, else [`FALLBACK_SERVICE_MESSAGE`].
    /// - [`LookupError::Http`] on network or TLS failure.
    /// - [`LookupError::Deserialize`] if a 2xx body is not a valid envelope.
    pub async fn search(&self, query: &SearchQuery) -> Result<RawLookupResponse, LookupError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SearchRequest {
                query: query.as_str(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Service {
                status: status.as_u16(),
                message: extract_service_message(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
            context: self.endpoint.to_string(),
            source: e,
        })
    }
}

/// Pulls the `message` field out of a failure body, falling back to the
/// fixed connect-failure text when the body is unreadable or silent.
fn extract_service_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_SERVICE_MESSAGE.to_owned())
}
