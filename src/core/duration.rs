use crate::domain::model::{DurationFormat, NumericInput};
use crate::utils::error::{HelperError, Result};

const MONTHS_PER_YEAR: u64 = 12;
// 2^64, the first whole count a u64 cannot hold.
const MONTHS_LIMIT: f64 = u64::MAX as f64;

/// Renders a month count as years and months, e.g. `13` -> `"1年1月"`.
///
/// Zero terms are left out, and a count under one month renders as the
/// format's initial label. Fractional counts are floored. Negative,
/// infinite and non-numeric counts are rejected.
pub fn convert_months_to_years_and_months(
    input: impl Into<NumericInput>,
    format: &DurationFormat,
) -> Result<String> {
    let input = input.into();
    let months = input.to_f64();

    let reason = if months.is_nan() {
        Some("not a number")
    } else if months.is_infinite() {
        Some("not a finite number")
    } else if months < 0.0 {
        Some("negative month count")
    } else if months >= MONTHS_LIMIT {
        Some("month count too large")
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(HelperError::InvalidDuration {
            value: input.to_string(),
            reason: reason.to_string(),
        });
    }

    let total = months.floor() as u64;
    let years = total / MONTHS_PER_YEAR;
    let remaining = total % MONTHS_PER_YEAR;

    let mut segments = Vec::with_capacity(2);
    if years != 0 {
        segments.push(format!("{}{}", years, format.year_unit));
    }
    if remaining != 0 {
        segments.push(format!("{}{}", remaining, format.month_unit));
    }

    if segments.is_empty() {
        return Ok(format.initial_label.clone());
    }
    Ok(segments.join(&format.separator))
}
