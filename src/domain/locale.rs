//! Built-in locale presets.
//!
//! Tags are matched on their language subtag, so `zh-CN`, `zh_TW` and `zh` all
//! resolve to the same preset.

use super::model::{DurationFormat, FormatConfig, NumberFormat};

pub const SUPPORTED_LOCALES: &[&str] = &["en-US", "zh-CN", "ja-JP", "de-DE", "fr-FR"];

fn language(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

impl NumberFormat {
    pub fn for_locale(tag: &str) -> Option<Self> {
        let (group, decimal) = match language(tag).as_str() {
            "en" | "zh" | "ja" => (",", "."),
            "de" => (".", ","),
            "fr" => ("\u{202F}", ","),
            _ => return None,
        };

        Some(Self {
            group_separator: group.to_string(),
            decimal_separator: decimal.to_string(),
            ..Self::default()
        })
    }
}

impl DurationFormat {
    pub fn for_locale(tag: &str) -> Option<Self> {
        let (year, month, separator, initial) = match language(tag).as_str() {
            "zh" => ("年", "月", "", "初始"),
            "ja" => ("年", "か月", "", "初期"),
            "en" => ("y", "m", " ", "initial"),
            "de" => (" J.", " M.", " ", "Beginn"),
            "fr" => (" an", " mois", " ", "début"),
            _ => return None,
        };

        Some(Self {
            year_unit: year.to_string(),
            month_unit: month.to_string(),
            separator: separator.to_string(),
            initial_label: initial.to_string(),
        })
    }
}

impl FormatConfig {
    pub fn for_locale(tag: &str) -> Option<Self> {
        Some(Self {
            number: NumberFormat::for_locale(tag)?,
            duration: DurationFormat::for_locale(tag)?,
        })
    }
}
