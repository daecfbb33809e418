use async_trait::async_trait;
use oui_data_domain::{DomainError, OuiMapping};

/// Upstream OUI-to-vendor feed consumed by the dataset generator.
#[async_trait]
pub trait OuiFeed: Send + Sync {
    async fn fetch(&self) -> Result<OuiMapping, DomainError>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}
