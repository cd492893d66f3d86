pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::cli::{LocalPicker, LocalStorage};
pub use config::toml_config::TomlConfig;
pub use core::duration::convert_months_to_years_and_months;
pub use core::label::format_label;
pub use core::number::number_with_commas;
pub use core::transfer::{
    download_json, download_value, upload_json, upload_json_as, DEFAULT_DOWNLOAD_FILENAME,
};
pub use domain::model::{DurationFormat, FormatConfig, NumberFormat, NumericInput};
pub use domain::ports::{DownloadSink, FilePicker};
pub use utils::error::{HelperError, Result, UploadErrorKind};
