use serde::{Deserialize, Serialize};

/// A number or a numeric string, coerced the way a loosely typed caller expects:
/// strings are trimmed, the empty string is zero, anything unparsable is NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    pub fn to_f64(&self) -> f64 {
        match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => parse_numeric_text(s),
        }
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_literal(&trimmed[2..], radix);
    }

    // f64::from_str also takes "inf" and "nan"; only digits, signs, dots and exponents count here.
    let numeric_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric_chars {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses the digits of a `0x`/`0o`/`0b` literal, rounding to the nearest f64
/// at any length (overlong literals become infinity, never NaN).
///
/// Keeps at least 125 leading bits in a u128 and folds every dropped nonzero
/// digit into the lowest bit, so the final conversion rounds as if exact.
fn parse_radix_literal(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    let bits_per_digit = radix.trailing_zeros();
    let mut mantissa: u128 = 0;
    let mut dropped_bits: i32 = 0;
    let mut sticky = false;

    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            return f64::NAN;
        };
        if dropped_bits == 0 && mantissa.leading_zeros() >= bits_per_digit {
            mantissa = (mantissa << bits_per_digit) | digit as u128;
        } else {
            dropped_bits = dropped_bits.saturating_add(bits_per_digit as i32);
            sticky |= digit != 0;
        }
    }

    if sticky {
        mantissa |= 1;
    }
    mantissa as f64 * 2f64.powi(dropped_bits)
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        NumericInput::Number(value as f64)
    }
}

macro_rules! numeric_input_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(value: $t) -> Self {
                    NumericInput::Number(value as f64)
                }
            }
        )*
    };
}

numeric_input_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl From<&String> for NumericInput {
    fn from(value: &String) -> Self {
        NumericInput::Text(value.clone())
    }
}

impl std::fmt::Display for NumericInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericInput::Number(n) => write!(f, "{}", n),
            NumericInput::Text(s) => f.write_str(s),
        }
    }
}

/// Digit grouping and decimal rules for rendering numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub group_separator: String,
    pub decimal_separator: String,
    pub group_size: usize,
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            group_size: 3,
            max_fraction_digits: 3,
        }
    }
}

/// Units and wording for rendering a month count as years and months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationFormat {
    pub year_unit: String,
    pub month_unit: String,
    pub separator: String,
    pub initial_label: String,
}

impl Default for DurationFormat {
    fn default() -> Self {
        Self {
            year_unit: "年".to_string(),
            month_unit: "月".to_string(),
            separator: String::new(),
            initial_label: "初始".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatConfig {
    pub number: NumberFormat,
    pub duration: DurationFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_coercion() {
        assert_eq!(NumericInput::from(" 42 ").to_f64(), 42.0);
        assert_eq!(NumericInput::from("").to_f64(), 0.0);
        assert_eq!(NumericInput::from("1e3").to_f64(), 1000.0);
        assert_eq!(NumericInput::from("-12.5").to_f64(), -12.5);
        assert_eq!(NumericInput::from("0x10").to_f64(), 16.0);
        assert_eq!(NumericInput::from("-Infinity").to_f64(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_radix_literals_beyond_u64() {
        assert_eq!(NumericInput::from("0x1ffffffffffffffff").to_f64(), 2f64.powi(65));
        assert_eq!(NumericInput::from("0b1010").to_f64(), 10.0);
        assert_eq!(NumericInput::from("0o777").to_f64(), 511.0);

        // 2^53 + 1 sits exactly between two floats; any set bit further down breaks the tie upward
        let above_tie = format!("0x20000000000001{}", "0".repeat(30) + "1");
        let expected = (2f64.powi(53) + 2.0) * 2f64.powi(124);
        assert_eq!(NumericInput::from(above_tie).to_f64(), expected);

        let overlong = format!("0x{}", "f".repeat(300));
        assert_eq!(NumericInput::from(overlong).to_f64(), f64::INFINITY);
        assert!(NumericInput::from("0x").to_f64().is_nan());
    }

    #[test]
    fn test_non_numeric_text_is_nan() {
        assert!(NumericInput::from("abc").to_f64().is_nan());
        assert!(NumericInput::from("inf").to_f64().is_nan());
        assert!(NumericInput::from("nan").to_f64().is_nan());
        assert!(NumericInput::from("1,000").to_f64().is_nan());
        assert!(NumericInput::from("0xZZ").to_f64().is_nan());
    }

    #[test]
    fn test_numeric_from_numbers() {
        assert_eq!(NumericInput::from(7u8).to_f64(), 7.0);
        assert_eq!(NumericInput::from(-3i64).to_f64(), -3.0);
        assert_eq!(NumericInput::from(2.5f64).to_f64(), 2.5);
    }
}
