use async_trait::async_trait;
use oui_data_domain::DomainError;

/// Source of the raw bytes of the bundled `oui.json` resource.
///
/// Implementations return the complete content or fail: a missing resource
/// is `DomainError::ResourceNotFound`, an unreadable one `DomainError::IoError`.
#[async_trait]
pub trait DatasetLoader: Send + Sync {
    async fn load_raw_data(&self) -> Result<Vec<u8>, DomainError>;
}
