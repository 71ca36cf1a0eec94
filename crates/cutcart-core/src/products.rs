use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier carried by the placeholder record substituted for entries the
/// normalizer could not parse.
pub const SENTINEL_PRODUCT_ID: &str = "0000000000000";

/// Store identifier carried by the placeholder record.
pub const SENTINEL_STORE_ID: &str = "00000000";

/// A product returned by the lookup service, normalized for rendering and
/// comparison across stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Service product ID, kept as a string to avoid precision loss on the
    /// 13-digit identifiers the service hands out.
    pub product_id: String,
    pub name: String,
    pub brand: String,
    /// Unit price in dollars. Entries with a missing or unparseable price
    /// normalize to `0.00` rather than being dropped.
    pub price: Decimal,
    /// Primary image URL; empty string when the service supplied none.
    pub image_url: String,
    /// Store the price was observed at, when the service reports one.
    pub store_id: Option<String>,
}

impl ProductRecord {
    /// Returns the fixed placeholder record used in place of an entry that
    /// failed to parse, so one malformed entry never discards the batch.
    #[must_use]
    pub fn sentinel() -> Self {
        Self {
            product_id: SENTINEL_PRODUCT_ID.to_owned(),
            name: "No Product".to_owned(),
            brand: "Unknown".to_owned(),
            price: Decimal::ZERO,
            image_url: String::new(),
            store_id: Some(SENTINEL_STORE_ID.to_owned()),
        }
    }

    /// Returns `true` if this record is the parse-failure placeholder.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.product_id == SENTINEL_PRODUCT_ID
    }

    /// Returns `true` if the record carries a non-empty image URL.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}
