/// Maps a raw CSV header to the field name used in parsed records.
///
/// `"Quantity"` and `"Price per unit"` have fixed short names. Every other header is
/// lowercased with spaces turned into underscores, so `"Total amount"` becomes
/// `total_amount`.
pub fn friendly_name(raw: &str) -> String {
    match raw {
        "Quantity" => "qty".to_string(),
        "Price per unit" => "price".to_string(),
        _ => raw.replace(' ', "_").to_lowercase()
    }
}
