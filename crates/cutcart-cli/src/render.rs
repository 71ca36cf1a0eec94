//! Plain-text rendering of the search state: feedback line, error line, and
//! the result list. Layout only; every decision was made upstream.

use std::fmt::Write;

use cutcart_core::{ProductRecord, SearchState};

pub(crate) fn render(state: &SearchState) {
    if !state.feedback.is_empty() {
        println!("{}", state.feedback);
    }
    if let Some(error) = &state.error {
        eprintln!("{error}");
    }
    if !state.records.is_empty() {
        println!("Search Results:");
        for record in &state.records {
            print!("{}", format_record(record));
        }
    }
    println!();
}

/// One product card as indented lines: name, brand, price, then store and
/// image only when present.
fn format_record(record: &ProductRecord) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "- {}", record.name);
    let _ = writeln!(card, "    Brand: {}", record.brand);
    let _ = writeln!(card, "    Price: ${:.2}", record.price);
    if let Some(store_id) = &record.store_id {
        let _ = writeln!(card, "    Store: {store_id}");
    }
    if record.has_image() {
        let _ = writeln!(card, "    Image: {}", record.image_url);
    }
    card
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn make_record() -> ProductRecord {
        ProductRecord {
            product_id: "0001111041700".to_owned(),
            name: "Kroger 2% Reduced Fat Milk".to_owned(),
            brand: "Kroger".to_owned(),
            price: Decimal::new(35, 1),
            image_url: "https://cdn.example.com/milk.jpg".to_owned(),
            store_id: Some("70300168".to_owned()),
        }
    }

    #[test]
    fn format_record_pads_price_to_two_decimals() {
        let card = format_record(&make_record());
        assert!(card.contains("Price: $3.50"), "card was: {card}");
    }

    #[test]
    fn format_record_includes_store_and_image_when_present() {
        let card = format_record(&make_record());
        assert!(card.contains("Store: 70300168"));
        assert!(card.contains("Image: https://cdn.example.com/milk.jpg"));
    }

    #[test]
    fn format_record_omits_store_and_image_when_absent() {
        let mut record = make_record();
        record.store_id = None;
        record.image_url = String::new();
        let card = format_record(&record);
        assert!(!card.contains("Store:"));
        assert!(!card.contains("Image:"));
    }

    #[test]
    fn format_record_sentinel_renders_placeholder_fields() {
        let card = format_record(&ProductRecord::sentinel());
        assert!(card.contains("- No Product"));
        assert!(card.contains("Brand: Unknown"));
        assert!(card.contains("Price: $0.00"));
        assert!(card.contains("Store: 00000000"));
    }
}
