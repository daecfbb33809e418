use crate::ports::DatasetLoader;
use crate::services::decode_mapping;
use oui_data_domain::{DomainError, OuiMapping};
use std::sync::Arc;
use tracing::debug;

/// Use case: Load and decode the OUI dataset into the canonical mapping
///
/// Every call reads and decodes the resource again; the returned mapping is
/// owned by the caller.
pub struct FetchMappingUseCase {
    loader: Arc<dyn DatasetLoader>,
}

impl FetchMappingUseCase {
    pub fn new(loader: Arc<dyn DatasetLoader>) -> Self {
        Self { loader }
    }

    pub async fn execute(&self) -> Result<OuiMapping, DomainError> {
        let bytes = self.loader.load_raw_data().await?;
        debug!(bytes = bytes.len(), "OUI dataset loaded");

        let mapping = decode_mapping(&bytes)?;
        debug!(entries = mapping.len(), "OUI dataset decoded");

        Ok(mapping)
    }

    /// Exact-key lookup. `id` is matched verbatim, without case folding.
    pub async fn lookup(&self, id: &str) -> Result<Option<String>, DomainError> {
        let mut mapping = self.execute().await?;
        Ok(mapping.remove(id))
    }
}
