//! JSON export and import.
//!
//! Export hands a text payload to a [`DownloadSink`]. Import mounts a transient
//! control on a [`FilePicker`], waits for a selection, reads it and parses it.
//! The control is owned by a guard so it is detached on every way out of the
//! import, including the caller dropping the future mid-prompt.

use crate::domain::ports::{ControlId, DownloadSink, FilePicker, JSON_MEDIA_TYPE};
use crate::utils::error::{HelperError, Result, UploadErrorKind};
use crate::utils::validation::validate_filename;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_DOWNLOAD_FILENAME: &str = "download.json";

/// Saves `content` verbatim under `filename` (default `download.json`).
///
/// The payload is treated as plain text; it is not checked to be JSON.
pub async fn download_json<S>(sink: &S, content: &str, filename: Option<&str>) -> Result<PathBuf>
where
    S: DownloadSink + ?Sized,
{
    let filename = filename.unwrap_or(DEFAULT_DOWNLOAD_FILENAME);
    validate_filename("filename", filename)?;

    let saved = sink.save(filename, content.as_bytes()).await?;
    tracing::info!("💾 Saved {} bytes to {}", content.len(), saved.display());
    Ok(saved)
}

/// Serializes `value` and saves it like [`download_json`].
pub async fn download_value<S, T>(
    sink: &S,
    value: &T,
    filename: Option<&str>,
    pretty: bool,
) -> Result<PathBuf>
where
    S: DownloadSink + ?Sized,
    T: Serialize + ?Sized,
{
    let content = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    download_json(sink, &content, filename).await
}

struct PickerControl<'a, P: FilePicker + ?Sized> {
    picker: &'a P,
    id: ControlId,
}

impl<'a, P: FilePicker + ?Sized> PickerControl<'a, P> {
    fn mount(picker: &'a P, accept: &str) -> Self {
        let id = picker.attach(accept);
        Self { picker, id }
    }
}

impl<P: FilePicker + ?Sized> Drop for PickerControl<'_, P> {
    fn drop(&mut self) {
        self.picker.detach(self.id);
    }
}

/// Prompts for a JSON file and returns its parsed contents.
///
/// Fails with [`UploadErrorKind::NoFile`] when the prompt is dismissed,
/// [`UploadErrorKind::ReadError`] when the file cannot be read and
/// [`UploadErrorKind::InvalidJson`] when it does not parse.
pub async fn upload_json<P>(picker: &P) -> Result<serde_json::Value>
where
    P: FilePicker + ?Sized,
{
    upload_json_as(picker).await
}

/// Like [`upload_json`], deserializing straight into `T`. A document that
/// parses but does not fit `T` is also [`UploadErrorKind::InvalidJson`].
pub async fn upload_json_as<T, P>(picker: &P) -> Result<T>
where
    T: DeserializeOwned,
    P: FilePicker + ?Sized,
{
    let control = PickerControl::mount(picker, JSON_MEDIA_TYPE);

    let file = picker.select(control.id).await.ok_or_else(|| {
        tracing::warn!("Picker control {:?} dismissed without a selection", control.id);
        HelperError::upload(UploadErrorKind::NoFile, "selection dismissed")
    })?;
    tracing::debug!("Selected {}", file.path.display());

    let text = picker.read_text(&file).await.map_err(|e| {
        tracing::warn!("Could not read {}: {}", file.path.display(), e);
        HelperError::upload(UploadErrorKind::ReadError, format!("{}: {}", file.name, e))
    })?;

    let value = serde_json::from_str(&text).map_err(|e| {
        tracing::warn!("{} is not valid JSON: {}", file.path.display(), e);
        HelperError::upload(UploadErrorKind::InvalidJson, format!("{}: {}", file.name, e))
    })?;

    tracing::info!("📂 Imported {} ({} bytes)", file.name, text.len());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::PickedFile;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockSink {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    #[async_trait]
    impl DownloadSink for MockSink {
        async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
            let mut files = self.files.lock().unwrap();
            files.insert(filename.to_string(), data.to_vec());
            Ok(PathBuf::from("/mock").join(filename))
        }
    }

    enum Outcome {
        Dismiss,
        Content(&'static str),
        Unreadable,
        Hang,
    }

    struct MockPicker {
        outcome: Outcome,
        mounted: Mutex<Vec<ControlId>>,
        detached: Mutex<Vec<ControlId>>,
    }

    impl MockPicker {
        fn new(outcome: Outcome) -> Self {
            Self {
                outcome,
                mounted: Mutex::new(Vec::new()),
                detached: Mutex::new(Vec::new()),
            }
        }

        fn assert_all_detached(&self) {
            let mounted = self.mounted.lock().unwrap();
            let detached = self.detached.lock().unwrap();
            assert_eq!(mounted.len(), 1);
            assert_eq!(*mounted, *detached);
        }
    }

    #[async_trait]
    impl FilePicker for MockPicker {
        fn attach(&self, accept: &str) -> ControlId {
            assert_eq!(accept, JSON_MEDIA_TYPE);
            let mut mounted = self.mounted.lock().unwrap();
            let id = ControlId(mounted.len() as u64 + 1);
            mounted.push(id);
            id
        }

        fn detach(&self, control: ControlId) {
            self.detached.lock().unwrap().push(control);
        }

        async fn select(&self, _control: ControlId) -> Option<PickedFile> {
            match self.outcome {
                Outcome::Dismiss => None,
                Outcome::Hang => std::future::pending().await,
                _ => Some(PickedFile::new("/mock/input.json")),
            }
        }

        async fn read_text(&self, _file: &PickedFile) -> std::io::Result<String> {
            match self.outcome {
                Outcome::Content(text) => Ok(text.to_string()),
                _ => Err(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "permission denied",
                )),
            }
        }
    }

    #[tokio::test]
    async fn test_upload_parses_json() {
        let picker = MockPicker::new(Outcome::Content(r#"{"a":1}"#));
        let value = upload_json(&picker).await.unwrap();
        assert_eq!(value, serde_json::json!({"a": 1}));
        picker.assert_all_detached();
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_json() {
        let picker = MockPicker::new(Outcome::Content("not json"));
        let err = upload_json(&picker).await.unwrap_err();
        assert_eq!(err.upload_kind(), Some(UploadErrorKind::InvalidJson));
        assert!(err.to_string().starts_with("Invalid JSON"));
        picker.assert_all_detached();
    }

    #[tokio::test]
    async fn test_upload_dismissed_detaches_control() {
        let picker = MockPicker::new(Outcome::Dismiss);
        let err = upload_json(&picker).await.unwrap_err();
        assert_eq!(err.upload_kind(), Some(UploadErrorKind::NoFile));
        assert!(err.to_string().starts_with("No file"));
        picker.assert_all_detached();
    }

    #[tokio::test]
    async fn test_upload_read_error() {
        let picker = MockPicker::new(Outcome::Unreadable);
        let err = upload_json(&picker).await.unwrap_err();
        assert_eq!(err.upload_kind(), Some(UploadErrorKind::ReadError));
        picker.assert_all_detached();
    }

    #[tokio::test]
    async fn test_abandoned_upload_detaches_control() {
        let picker = MockPicker::new(Outcome::Hang);
        let result = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            upload_json(&picker),
        )
        .await;
        assert!(result.is_err());
        picker.assert_all_detached();
    }

    #[tokio::test]
    async fn test_upload_typed_mismatch_is_invalid_json() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Settings {
            name: String,
        }

        let picker = MockPicker::new(Outcome::Content(r#"{"a":1}"#));
        let err = upload_json_as::<Settings, _>(&picker).await.unwrap_err();
        assert_eq!(err.upload_kind(), Some(UploadErrorKind::InvalidJson));
    }

    #[tokio::test]
    async fn test_download_uses_default_filename() {
        let sink = MockSink::default();
        let saved = download_json(&sink, "plain text", None).await.unwrap();

        assert_eq!(saved, PathBuf::from("/mock/download.json"));
        let files = sink.files.lock().unwrap();
        assert_eq!(files.get("download.json").unwrap(), b"plain text");
    }

    #[tokio::test]
    async fn test_download_rejects_path_like_filename() {
        let sink = MockSink::default();
        let result = download_json(&sink, "{}", Some("../outside.json")).await;
        assert!(matches!(
            result,
            Err(HelperError::InvalidConfigValueError { .. })
        ));
        assert!(sink.files.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_download_value_pretty() {
        let sink = MockSink::default();
        let value = serde_json::json!({"a": 1});
        download_value(&sink, &value, Some("pretty.json"), true)
            .await
            .unwrap();

        let files = sink.files.lock().unwrap();
        let text = String::from_utf8(files.get("pretty.json").unwrap().clone()).unwrap();
        assert_eq!(text, "{\n  \"a\": 1\n}");
    }
}
