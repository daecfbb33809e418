use async_trait::async_trait;
use oui_data_application::ports::DatasetLoader;
use oui_data_domain::{DomainError, OUI_RESOURCE_NAME};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Reads `oui.json` from a resource directory on disk
/// (e.g. next to an installed binary).
pub struct FileDatasetLoader {
    resource_dir: PathBuf,
}

impl FileDatasetLoader {
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
        }
    }

    pub fn resource_path(&self) -> PathBuf {
        self.resource_dir.join(OUI_RESOURCE_NAME)
    }
}

#[async_trait]
impl DatasetLoader for FileDatasetLoader {
    async fn load_raw_data(&self) -> Result<Vec<u8>, DomainError> {
        let path = self.resource_path();
        let bytes = fs::read(&path).await.map_err(|e| read_error(&path, e))?;

        debug!(path = %path.display(), bytes = bytes.len(), "Dataset file read");
        Ok(bytes)
    }
}

fn read_error(path: &Path, e: std::io::Error) -> DomainError {
    match e.kind() {
        ErrorKind::NotFound => DomainError::ResourceNotFound(path.display().to_string()),
        _ => DomainError::IoError(format!("Failed to read {}: {}", path.display(), e)),
    }
}
