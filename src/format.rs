//! Display formatting for amounts, percentages, names and dates.
//!
//! None of the aggregation code formats anything; these helpers are for the
//! consumers of the aggregated data.

use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};
use unicode_segmentation::UnicodeSegmentation;

/// The symbol to prefix amounts in `currency_code` with, if there is a well
/// known one.
pub fn currency_symbol(currency_code: &str) -> Option<&'static str> {
    let symbol = match currency_code.to_ascii_uppercase().as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "NGN" => "₦",
        "GHS" => "GH₵",
        "KRW" => "₩",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        _ => return None,
    };

    Some(symbol)
}

/// Formats `amount` as currency, e.g. "$1,234.50" or "-€12.00".
///
/// Amounts are rounded half away from zero to two decimal places. Currencies
/// without a known symbol are prefixed with their code, e.g. "CHF 12.00".
pub fn format_currency(amount: Decimal, currency_code: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let prefix = match currency_symbol(currency_code) {
        Some(symbol) => symbol.to_owned(),
        None => format!("{} ", currency_code.to_ascii_uppercase()),
    };

    if rounded.is_zero() {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return format!("{prefix}0.00");
    }

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let magnitude = rounded.abs();

    let formatted = match (currency_formatter(&prefix), magnitude.to_f64()) {
        (Some(formatter), Some(number)) => formatter.fmt_string(number),
        _ => format!("{prefix}{magnitude:.2}"),
    };

    format!("{sign}{}", pad_cents(formatted))
}

fn currency_formatter(prefix: &str) -> Option<Formatter> {
    Formatter::currency(prefix)
        .ok()
        .map(|formatter| formatter.precision(Precision::Decimals(2)))
}

/// numfmt omits trailing zeros, e.g. "12.30" is rendered as "12.3", so we add
/// them back.
fn pad_cents(mut formatted: String) -> String {
    match formatted.rfind('.') {
        Some(point) => {
            let decimals = formatted.len() - point - 1;
            for _ in decimals..2 {
                formatted.push('0');
            }
        }
        None => formatted.push_str(".00"),
    }

    formatted
}

/// Formats a percentage with one decimal place, e.g. "66.7%".
pub fn format_percentage(percentage: Decimal) -> String {
    format!("{percentage:.1}%")
}

/// Truncates `name` to at most `max_graphemes` graphemes, ending truncated
/// names with "...".
pub fn shorten_name(name: &str, max_graphemes: usize) -> String {
    if name.graphemes(true).count() <= max_graphemes {
        return name.to_owned();
    }

    let truncated: String = name
        .graphemes(true)
        .take(max_graphemes.saturating_sub(3))
        .collect();

    truncated + "..."
}

const DAY_LABEL_FORMAT: &[BorrowedFormatItem] =
    format_description!("[month repr:short] [day padding:none]");

const TIMESTAMP_LABEL_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[month repr:short] [day padding:none], [hour repr:12]:[minute] [period case:upper]"
);

/// Formats a date for chart axes, e.g. "Jan 5".
pub fn format_day_label(date: Date) -> String {
    date.format(DAY_LABEL_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Formats a timestamp for chart axes, e.g. "Jan 5, 09:30 PM".
///
/// The timestamp is formatted in its own offset, convert it first to show
/// local times.
pub fn format_timestamp_label(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(TIMESTAMP_LABEL_FORMAT)
        .unwrap_or_else(|_| timestamp.to_string())
}
