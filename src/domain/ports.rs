use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Media type the upload flow asks pickers to filter on.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Identifies one transient selection control mounted by a [`FilePicker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub path: PathBuf,
    pub name: String,
}

impl PickedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// Somewhere a user picks a file from.
///
/// Every control returned by `attach` must be handed back to `detach` exactly once.
#[async_trait]
pub trait FilePicker: Send + Sync {
    fn attach(&self, accept: &str) -> ControlId;
    fn detach(&self, control: ControlId);
    /// Waits for the user. `None` means the prompt was dismissed.
    async fn select(&self, control: ControlId) -> Option<PickedFile>;
    async fn read_text(&self, file: &PickedFile) -> std::io::Result<String>;
}

/// Somewhere a text payload can be saved under a file name.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf>;
}
