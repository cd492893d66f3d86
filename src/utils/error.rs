use std::fmt;
use thiserror::Error;

/// Why an upload was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadErrorKind {
    NoFile,
    ReadError,
    InvalidJson,
}

impl fmt::Display for UploadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UploadErrorKind::NoFile => "No file",
            UploadErrorKind::ReadError => "Read error",
            UploadErrorKind::InvalidJson => "Invalid JSON",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("{kind}: {message}")]
    Upload {
        kind: UploadErrorKind,
        message: String,
    },

    #[error("Invalid duration '{value}': {reason}")]
    InvalidDuration { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Transfer,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HelperError {
    pub fn upload(kind: UploadErrorKind, message: impl Into<String>) -> Self {
        HelperError::Upload {
            kind,
            message: message.into(),
        }
    }

    /// The upload rejection kind, if this is an upload failure.
    pub fn upload_kind(&self) -> Option<UploadErrorKind> {
        match self {
            HelperError::Upload { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HelperError::InvalidDuration { .. } => ErrorCategory::Input,
            HelperError::Upload { .. } | HelperError::SerializationError(_) => {
                ErrorCategory::Transfer
            }
            HelperError::ConfigError { .. }
            | HelperError::ConfigValidationError { .. }
            | HelperError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            HelperError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HelperError::Upload {
                kind: UploadErrorKind::NoFile,
                ..
            } => ErrorSeverity::Low,
            HelperError::Upload { .. } | HelperError::InvalidDuration { .. } => {
                ErrorSeverity::Medium
            }
            HelperError::SerializationError(_)
            | HelperError::ConfigError { .. }
            | HelperError::ConfigValidationError { .. }
            | HelperError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            HelperError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HelperError::Upload {
                kind: UploadErrorKind::NoFile,
                ..
            } => "No file was selected".to_string(),
            HelperError::Upload {
                kind: UploadErrorKind::ReadError,
                message,
            } => format!("The selected file could not be read ({})", message),
            HelperError::Upload {
                kind: UploadErrorKind::InvalidJson,
                message,
            } => format!("The selected file is not valid JSON ({})", message),
            HelperError::InvalidDuration { value, reason } => {
                format!("'{}' is not a usable month count: {}", value, reason)
            }
            HelperError::IoError(e) => format!("File system error: {}", e),
            HelperError::SerializationError(e) => format!("Could not serialize value: {}", e),
            HelperError::ConfigError { message } => format!("Configuration problem: {}", message),
            HelperError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            HelperError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not allowed for '{}': {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HelperError::Upload {
                kind: UploadErrorKind::NoFile,
                ..
            } => "Pass a file path or enter one at the prompt",
            HelperError::Upload {
                kind: UploadErrorKind::ReadError,
                ..
            } => "Check that the file exists and is readable",
            HelperError::Upload {
                kind: UploadErrorKind::InvalidJson,
                ..
            } => "Make sure the file contains a single well-formed JSON document",
            HelperError::InvalidDuration { .. } => "Use a non-negative whole number of months",
            HelperError::IoError(_) => "Check permissions and free space on the output directory",
            HelperError::SerializationError(_) => "Check the value being exported",
            HelperError::ConfigError { .. }
            | HelperError::ConfigValidationError { .. }
            | HelperError::InvalidConfigValueError { .. } => "Review the TOML configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
