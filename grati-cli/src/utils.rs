use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a raw field value cannot be read as a monetary amount.
#[derive(Debug, Error)]
#[error("invalid amount '{value}'")]
pub struct ParseAmountError {
    value: String,
}

/// Amounts are plain digits with at most one decimal point.
fn amount_shape() -> &'static Regex {
    static AMOUNT_SHAPE: OnceLock<Regex> = OnceLock::new();
    AMOUNT_SHAPE.get_or_init(|| Regex::new(r"^\d*\.?\d*$").expect("amount pattern is valid"))
}

/// Normalizes a raw amount: trims whitespace, strips an optional `S/`
/// currency prefix and comma thousands separators.
fn normalize_amount(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_prefix = trimmed
        .strip_prefix("S/")
        .map(str::trim_start)
        .unwrap_or(trimmed);
    without_prefix.replace(',', "")
}

/// Parses a raw field value into a [`Decimal`] amount.
///
/// Handles `S/` prefixes and comma thousands separators (e.g.
/// `"S/ 1,234.56"`). Empty or whitespace-only input is treated as zero;
/// anything else must be digits with at most one decimal point.
pub fn parse_amount(raw: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount(raw);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    if !amount_shape().is_match(&normalized) {
        tracing::warn!(input = %raw, "rejected amount with invalid shape");
        return Err(ParseAmountError {
            value: raw.to_string(),
        });
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %raw, "unparseable amount: {e}");
        ParseAmountError {
            value: raw.to_string(),
        }
    })
}

/// Formats an amount as Peruvian soles: `S/ 1,234.56`.
///
/// Rounds to two decimal places and groups the integer part with commas.
pub fn format_currency(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}S/ {grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_plain_and_decorated_values() {
        assert_eq!(parse_amount("2500").unwrap(), dec!(2500));
        assert_eq!(parse_amount("  1,234.56  ").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("S/ 1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("S/2500").unwrap(), dec!(2500));
    }

    #[test]
    fn parse_amount_treats_empty_as_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_rejects_shapes_the_form_would_block() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("-2500").is_err());
        assert!(parse_amount("1.2.3").is_err());
        assert!(parse_amount("1e3").is_err());
        assert!(parse_amount(".").is_err());
    }

    #[test]
    fn format_currency_groups_and_pads() {
        assert_eq!(format_currency(dec!(1234.5)), "S/ 1,234.50");
        assert_eq!(format_currency(dec!(1234567.891)), "S/ 1,234,567.89");
        assert_eq!(format_currency(dec!(0)), "S/ 0.00");
        assert_eq!(format_currency(dec!(42.19)), "S/ 42.19");
    }

    #[test]
    fn format_currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(667.1875)), "S/ 667.19");
    }
}
