use super::embedded::EmbeddedDatasetLoader;
use oui_data_application::use_cases::{FetchEntriesUseCase, FetchMappingUseCase};
use oui_data_domain::{DomainError, OuiEntry, OuiMapping};
use std::sync::Arc;

/// Read API over the dataset embedded in this library.
///
/// Each call decodes the embedded resource again and hands back an
/// independent copy.
pub struct BundledOuiData;

impl BundledOuiData {
    pub async fn fetch_mapping() -> Result<OuiMapping, DomainError> {
        FetchMappingUseCase::new(Arc::new(EmbeddedDatasetLoader::new()))
            .execute()
            .await
    }

    /// Entries sorted ascending by OUI.
    pub async fn fetch_entries() -> Result<Vec<OuiEntry>, DomainError> {
        FetchEntriesUseCase::new(Arc::new(EmbeddedDatasetLoader::new()))
            .execute()
            .await
    }
}
