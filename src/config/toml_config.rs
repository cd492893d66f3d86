use crate::core::transfer::DEFAULT_DOWNLOAD_FILENAME;
use crate::domain::locale::SUPPORTED_LOCALES;
use crate::domain::model::FormatConfig;
use crate::utils::error::{HelperError, Result};
use crate::utils::validation::{
    validate_filename, validate_non_empty_string, validate_path, validate_positive_number,
    validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_OUTPUT_DIR: &str = ".";
const MAX_FRACTION_DIGITS: usize = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub locale: Option<LocaleConfig>,
    pub number: Option<NumberConfig>,
    pub duration: Option<DurationConfig>,
    pub transfer: Option<TransferConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumberConfig {
    pub group_separator: Option<String>,
    pub decimal_separator: Option<String>,
    pub group_size: Option<usize>,
    pub max_fraction_digits: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DurationConfig {
    pub year_unit: Option<String>,
    pub month_unit: Option<String>,
    pub separator: Option<String>,
    pub initial_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferConfig {
    pub output_dir: Option<String>,
    pub default_filename: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HelperError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HelperError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HelperError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Replaces the configured locale, e.g. from a command line flag.
    pub fn set_locale(&mut self, name: impl Into<String>) {
        self.locale = Some(LocaleConfig { name: name.into() });
    }

    pub fn locale_name(&self) -> Option<&str> {
        self.locale.as_ref().map(|l| l.name.as_str())
    }

    pub fn output_dir(&self) -> &str {
        self.transfer
            .as_ref()
            .and_then(|t| t.output_dir.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    pub fn default_filename(&self) -> &str {
        self.transfer
            .as_ref()
            .and_then(|t| t.default_filename.as_deref())
            .unwrap_or(DEFAULT_DOWNLOAD_FILENAME)
    }

    /// Locale preset with the explicit `[number]` and `[duration]` fields laid over it.
    pub fn format_config(&self) -> Result<FormatConfig> {
        let mut formats = match self.locale_name() {
            Some(name) => {
                FormatConfig::for_locale(name).ok_or_else(|| unknown_locale(name))?
            }
            None => FormatConfig::default(),
        };

        if let Some(number) = &self.number {
            let target = &mut formats.number;
            if let Some(v) = &number.group_separator {
                target.group_separator = v.clone();
            }
            if let Some(v) = &number.decimal_separator {
                target.decimal_separator = v.clone();
            }
            if let Some(v) = number.group_size {
                target.group_size = v;
            }
            if let Some(v) = number.max_fraction_digits {
                target.max_fraction_digits = v;
            }
        }

        if let Some(duration) = &self.duration {
            let target = &mut formats.duration;
            if let Some(v) = &duration.year_unit {
                target.year_unit = v.clone();
            }
            if let Some(v) = &duration.month_unit {
                target.month_unit = v.clone();
            }
            if let Some(v) = &duration.separator {
                target.separator = v.clone();
            }
            if let Some(v) = &duration.initial_label {
                target.initial_label = v.clone();
            }
        }

        Ok(formats)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(name) = self.locale_name() {
            if FormatConfig::for_locale(name).is_none() {
                return Err(unknown_locale(name));
            }
        }

        if let Some(number) = &self.number {
            if let Some(size) = number.group_size {
                validate_positive_number("number.group_size", size, 1)?;
            }
            if let Some(digits) = number.max_fraction_digits {
                validate_range("number.max_fraction_digits", digits, 0, MAX_FRACTION_DIGITS)?;
            }
            if let Some(decimal) = &number.decimal_separator {
                if decimal.is_empty() {
                    return Err(HelperError::InvalidConfigValueError {
                        field: "number.decimal_separator".to_string(),
                        value: decimal.clone(),
                        reason: "Decimal separator cannot be empty".to_string(),
                    });
                }
            }
        }

        if let Some(label) = self.duration.as_ref().and_then(|d| d.initial_label.as_deref()) {
            validate_non_empty_string("duration.initial_label", label)?;
        }

        validate_path("transfer.output_dir", self.output_dir())?;
        validate_filename("transfer.default_filename", self.default_filename())?;

        Ok(())
    }
}

fn unknown_locale(name: &str) -> HelperError {
    HelperError::InvalidConfigValueError {
        field: "locale.name".to_string(),
        value: name.to_string(),
        reason: format!(
            "Unsupported locale. Supported locales: {}",
            SUPPORTED_LOCALES.join(", ")
        ),
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
