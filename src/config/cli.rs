use crate::domain::ports::{ControlId, DownloadSink, FilePicker, PickedFile, JSON_MEDIA_TYPE};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

#[async_trait]
impl DownloadSink for LocalStorage {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = Path::new(&self.base_path).join(filename);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, data).await?;
        Ok(full_path)
    }
}

/// Picks files from the local file system: a path fixed up front, or one typed on stdin.
#[derive(Debug, Default)]
pub struct LocalPicker {
    preset: Option<PathBuf>,
    next_control: AtomicU64,
}

impl LocalPicker {
    pub fn new(preset: Option<PathBuf>) -> Self {
        Self {
            preset,
            next_control: AtomicU64::new(1),
        }
    }

    async fn prompt_stdin(&self) -> Option<PathBuf> {
        let mut stderr = tokio::io::stderr();
        let _ = stderr.write_all(b"JSON file to import (empty to cancel): ").await;
        let _ = stderr.flush().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        match lines.next_line().await {
            Ok(Some(line)) if !line.trim().is_empty() => Some(PathBuf::from(line.trim())),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Could not read selection from stdin: {}", e);
                None
            }
        }
    }
}

fn matches_accept(file: &PickedFile, accept: &str) -> bool {
    if accept != JSON_MEDIA_TYPE {
        return true;
    }
    Path::new(&file.name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[async_trait]
impl FilePicker for LocalPicker {
    fn attach(&self, accept: &str) -> ControlId {
        let id = ControlId(self.next_control.fetch_add(1, Ordering::Relaxed));
        tracing::debug!("Mounted picker control {:?} (accept: {})", id, accept);
        id
    }

    fn detach(&self, control: ControlId) {
        tracing::debug!("Detached picker control {:?}", control);
    }

    async fn select(&self, control: ControlId) -> Option<PickedFile> {
        let path = match &self.preset {
            Some(path) => Some(path.clone()),
            None => self.prompt_stdin().await,
        }?;

        let file = PickedFile::new(path);
        if !matches_accept(&file, JSON_MEDIA_TYPE) {
            // The filter is advisory, the same as a native dialog's type filter.
            tracing::warn!(
                "Control {:?}: '{}' does not look like a JSON file, reading it anyway",
                control,
                file.name
            );
        }
        Some(file)
    }

    async fn read_text(&self, file: &PickedFile) -> std::io::Result<String> {
        tokio::fs::read_to_string(&file.path).await
    }
}
