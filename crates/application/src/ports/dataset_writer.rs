use async_trait::async_trait;
use oui_data_domain::{DomainError, OuiMapping};

#[async_trait]
pub trait DatasetWriter: Send + Sync {
    /// Replaces the published dataset with `mapping` and returns its destination.
    async fn write(&self, mapping: &OuiMapping) -> Result<String, DomainError>;
}
