//! Normalization from the raw response envelope to [`ProductRecord`]s.
//!
//! Parsing is total: every raw entry produces exactly one record, with the
//! fixed sentinel substituted for entries that fail to parse, so one
//! malformed entry never discards the rest of the batch.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use thiserror::Error;

use cutcart_core::ProductRecord;

use crate::types::RawLookupResponse;

/// Why a single raw entry could not be turned into a [`ProductRecord`].
///
/// Never surfaced to the user or propagated past this module; the caller
/// sees a sentinel record instead. Kept as a typed error so the substitution
/// is an explicit `Result` fold rather than implicit suppression.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("entry text is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("entry is not a JSON object")]
    NotAnObject,

    #[error("missing or non-string required field `{0}`")]
    MissingField(&'static str),
}

/// Normalizes every raw entry in `raw`, in input order.
///
/// Output length always equals input length; entries that fail to parse are
/// replaced by [`ProductRecord::sentinel`]. Which array is read follows the
/// precedence documented on [`RawLookupResponse`].
#[must_use]
pub fn normalize(raw: &RawLookupResponse) -> Vec<ProductRecord> {
    match (&raw.products, &raw.results) {
        (Some(products), _) => products.iter().map(normalize_entry).collect(),
        (None, Some(results)) => results
            .iter()
            .map(|text| normalize_entry(&Value::String(text.clone())))
            .collect(),
        (None, None) => Vec::new(),
    }
}

/// The service's informational message, verbatim, or `""` when absent.
#[must_use]
pub fn feedback_message(raw: &RawLookupResponse) -> String {
    raw.message.clone().unwrap_or_default()
}

fn normalize_entry(entry: &Value) -> ProductRecord {
    parse_entry(entry).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "substituting sentinel for malformed entry");
        ProductRecord::sentinel()
    })
}

/// Parses one raw entry into a [`ProductRecord`].
///
/// A string entry is treated as the serialized-text form and parsed as JSON
/// first; an object entry is mapped directly.
///
/// # Errors
///
/// Returns [`EntryError`] if the entry text is not valid JSON, the parsed
/// value is not an object, or a required field is missing.
pub fn parse_entry(entry: &Value) -> Result<ProductRecord, EntryError> {
    match entry {
        Value::String(text) => {
            let parsed: Value = serde_json::from_str(text)?;
            match parsed {
                Value::Object(fields) => map_fields(&fields),
                _ => Err(EntryError::NotAnObject),
            }
        }
        Value::Object(fields) => map_fields(fields),
        _ => Err(EntryError::NotAnObject),
    }
}

fn map_fields(fields: &Map<String, Value>) -> Result<ProductRecord, EntryError> {
    Ok(ProductRecord {
        product_id: required_string(fields, "productId")?,
        name: required_string(fields, "name")?,
        // The service omits brand on own-label items; an absent brand is a
        // blank, not a malformed entry.
        brand: optional_string(fields, "brand").unwrap_or_default(),
        price: coerce_price(fields.get("price")),
        image_url: optional_string(fields, "imageUrl").unwrap_or_default(),
        store_id: optional_string(fields, "storeId"),
    })
}

fn required_string(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<String, EntryError> {
    optional_string(fields, name).ok_or(EntryError::MissingField(name))
}

/// `null` and non-string values are treated the same as an absent field.
fn optional_string(fields: &Map<String, Value>, name: &str) -> Option<String> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}

/// Coerces the raw `price` value to a non-negative [`Decimal`].
///
/// Accepts a JSON number or a numeric string; anything else (absent, null,
/// unparseable, negative) defaults to `0.00`.
fn coerce_price(value: Option<&Value>) -> Decimal {
    use std::str::FromStr;

    let parsed = match value {
        Some(Value::Number(number)) => Decimal::from_str(&number.to_string()).ok(),
        Some(Value::String(text)) => Decimal::from_str(text.trim()).ok(),
        _ => None,
    };
    match parsed {
        Some(price) if price >= Decimal::ZERO => price,
        _ => Decimal::ZERO,
    }
}
