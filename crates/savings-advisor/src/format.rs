//! Display Formatting
//!
//! Norwegian-style number rendering for the result slots: non-breaking
//! spaces between thousand groups, decimal comma, and a fixed number of
//! decimals per slot. Currency is cut to whole kroner, never rounded up.

use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator used by nb-NO (non-breaking space)
const GROUP_SEPARATOR: &str = "\u{a0}";

/// Hours per month, one decimal ("36,7")
pub fn format_hours(value: Decimal) -> String {
    format_fixed(value, 1)
}

/// Payback months, one decimal ("1,0")
pub fn format_months(value: Decimal) -> String {
    format_fixed(value, 1)
}

/// Whole-krone amount without unit ("14 666")
pub fn format_amount(value: Decimal) -> String {
    format_fixed(value.trunc(), 0)
}

/// Whole-krone amount with unit ("14 666 kr")
pub fn format_currency(value: Decimal) -> String {
    format!("{} kr", format_amount(value))
}

/// CSS width for the workload chart bar ("36.7%")
///
/// CSS wants a dot decimal, so this is the one place the locale rules
/// do not apply.
pub fn bar_width(percent: Decimal) -> String {
    format!("{}%", percent.round_dp(1).normalize())
}

fn format_fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.prec$}", rounded, prec = places as usize);

    match text.split_once('.') {
        Some((whole, frac)) => format!("{},{}", group_digits(whole), frac),
        None => group_digits(&text),
    }
}

fn group_digits(whole: &str) -> String {
    if let Some(digits) = whole.strip_prefix('-') {
        return format!("-{}", group_digits(digits));
    }

    whole
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(std::str::from_utf8)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
        .join(GROUP_SEPARATOR)
}
