use async_trait::async_trait;
use oui_data_application::ports::DatasetWriter;
use oui_data_application::services::encode_mapping;
use oui_data_domain::{DomainError, OuiMapping};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Publishes the dataset as pretty-printed JSON at a fixed path.
///
/// The file is replaced wholesale: content goes to a sibling temp file which
/// is then renamed over the destination.
pub struct JsonFileDatasetWriter {
    path: PathBuf,
}

impl JsonFileDatasetWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl DatasetWriter for JsonFileDatasetWriter {
    async fn write(&self, mapping: &OuiMapping) -> Result<String, DomainError> {
        let json = encode_mapping(mapping)?;
        let tmp = self.temp_path();

        fs::write(&tmp, json.as_bytes())
            .await
            .map_err(|e| write_error(&tmp, e))?;

        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(write_error(&self.path, e));
        }

        debug!(path = %self.path.display(), bytes = json.len(), "Dataset written");
        Ok(self.path.display().to_string())
    }
}

fn write_error(path: &Path, e: std::io::Error) -> DomainError {
    DomainError::WriteError(format!("{}: {}", path.display(), e))
}
