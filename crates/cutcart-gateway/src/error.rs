use thiserror::Error;

/// Errors returned by the lookup gateway.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status. `message` is the
    /// service-supplied explanation when the body carried one, else the
    /// fixed connect-failure fallback.
    #[error("search service error (status {status}): {message}")]
    Service { status: u16, message: String },

    /// A 2xx response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint is not a usable URL.
    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl LookupError {
    /// The service-supplied message for service-reported failures, when
    /// there is one to show.
    #[must_use]
    pub fn service_message(&self) -> Option<&str> {
        match self {
            LookupError::Service { message, .. } => Some(message),
            _ => None,
        }
    }
}
