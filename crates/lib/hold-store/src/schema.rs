pub const STATUS_HOLDING: &str = "holding";
pub const INVOICE_ID_PREFIX: &str = "INV-";
pub const INVOICE_ID_MIN_DIGITS: usize = 3;

/// Reason reported by statistics when there are no holding invoices.
pub const NO_REASON: &str = "없음";

/// Seed dataset compiled into the binary.
pub const SEED_TOML: &str = include_str!("../data/seed.toml");

/// Returns true for ids shaped like `INV-001`.
#[must_use]
pub fn is_valid_invoice_id(id: &str) -> bool {
    id.strip_prefix(INVOICE_ID_PREFIX).is_some_and(|digits| {
        digits.len() >= INVOICE_ID_MIN_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
    })
}

#[must_use]
pub fn not_found_message(invoice_id: &str) -> String {
    format!("Invoice ID '{invoice_id}' not found in holding list")
}
