pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{SearchClient, FALLBACK_SERVICE_MESSAGE};
pub use error::LookupError;
pub use normalize::{feedback_message, normalize};
pub use types::{RawLookupResponse, ResponseClass};
