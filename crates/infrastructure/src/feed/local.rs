use super::ieee_csv::parse_ieee_csv;
use async_trait::async_trait;
use oui_data_application::ports::OuiFeed;
use oui_data_domain::{DomainError, OuiMapping};
use std::path::PathBuf;
use tokio::fs;

/// Reads a previously downloaded IEEE registry CSV from disk.
pub struct LocalCsvFeed {
    path: PathBuf,
}

impl LocalCsvFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OuiFeed for LocalCsvFeed {
    async fn fetch(&self) -> Result<OuiMapping, DomainError> {
        let text = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::FeedError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        parse_ieee_csv(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
