//! Formatting and parsing utilities for numeric table fields

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a number with exactly two decimals, the way `toFixed(2)` does.
///
/// The exact binary value is rounded half away from zero, so `1.005`
/// (stored just below the tie) becomes `1.00` while `0.125` becomes `0.13`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0.00".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    match Decimal::from_f64_retain(magnitude) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            format!("{sign}{rounded}")
        }
        // Beyond the decimal range the binary value has no fractional part
        None => format!("{sign}{magnitude:.2}"),
    }
}

/// Render a number as the initial text of an editable numeric field
pub fn format_field_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Parse the longest numeric prefix of `input`, like `parseFloat`.
///
/// Leading whitespace is skipped and trailing garbage ignored. Returns `None`
/// when no digits can be read.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if text[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+') | Some(b'-')) {
            cursor += 1;
        }
        let exp_digits = count_digits(bytes, cursor);
        if exp_digits > 0 {
            end = cursor + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Parse a field for calculation: unreadable, blank or NaN input counts as 0
pub fn parse_field_or_zero(input: &str) -> f64 {
    match parse_float_prefix(input) {
        Some(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map(|tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}
