pub mod duration;
pub mod label;
pub mod number;
pub mod transfer;

pub use crate::domain::model::{DurationFormat, FormatConfig, NumberFormat, NumericInput};
pub use crate::domain::ports::{DownloadSink, FilePicker};
pub use crate::utils::error::Result;
