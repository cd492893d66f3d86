use crate::domain::model::{NumberFormat, NumericInput};

// Enough fraction digits to spell out any f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Renders a number with digit grouping, e.g. `1234567` -> `"1,234,567"`.
///
/// Input is coerced like a loosely typed `Number()` call, so garbage comes out
/// as `"NaN"` instead of an error. Callers that care must validate first.
pub fn number_with_commas(input: impl Into<NumericInput>, format: &NumberFormat) -> String {
    let value = input.into().to_f64();

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let (int_part, frac_part) = round_half_away_from_zero(value.abs(), format.max_fraction_digits);
    let int_part = int_part.as_str();
    let frac_part = frac_part.trim_end_matches('0');

    // no "-0" once rounding has eaten every digit
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, &format.group_separator, format.group_size));
    if !frac_part.is_empty() {
        out.push_str(&format.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Rounds a non-negative value to `digits` fraction digits, ties away from zero.
///
/// Works on the exact decimal expansion, so only true ties round up: `0.0625`
/// becomes `0.063` while `1.005` (stored just below) stays `1.00`.
fn round_half_away_from_zero(abs: f64, digits: usize) -> (String, String) {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, abs);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let keep = digits.min(frac_part.len());
    let round_up = frac_part
        .as_bytes()
        .get(keep)
        .is_some_and(|next| *next >= b'5');

    let mut kept: Vec<u8> = int_part.bytes().chain(frac_part[..keep].bytes()).collect();
    if round_up {
        let mut idx = kept.len();
        loop {
            if idx == 0 {
                kept.insert(0, b'1');
                break;
            }
            idx -= 1;
            if kept[idx] == b'9' {
                kept[idx] = b'0';
            } else {
                kept[idx] += 1;
                break;
            }
        }
    }

    let split = kept.len() - keep;
    let int_digits = kept[..split].iter().map(|&b| b as char).collect();
    let frac_digits = kept[split..].iter().map(|&b| b as char).collect();
    (int_digits, frac_digits)
}

fn group_digits(digits: &str, separator: &str, group_size: usize) -> String {
    if group_size == 0 || digits.len() <= group_size {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / group_size));
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % group_size == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
