//! Input Parsing
//!
//! The estimator itself never sees raw text. Whatever a visitor types is
//! coerced here first: anything unparsable or negative becomes zero, so a
//! half-typed field simply reads as "no volume" instead of an error.

use rust_decimal::Decimal;

/// Parse a whole-number field (e-mails, minutes, days)
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Parse a money field, tolerating the Norwegian decimal comma
pub fn parse_amount(raw: &str) -> Decimal {
    let cleaned = raw.trim().replace(',', ".");
    match cleaned.parse::<Decimal>() {
        Ok(amount) if amount >= Decimal::ZERO => amount,
        _ => Decimal::ZERO,
    }
}
