use super::fetch_mapping::FetchMappingUseCase;
use crate::ports::DatasetLoader;
use oui_data_domain::{entries_from_mapping, DomainError, OuiEntry};
use std::sync::Arc;

/// Use case: Fetch the dataset as a list of entries sorted by OUI
pub struct FetchEntriesUseCase {
    fetch_mapping: FetchMappingUseCase,
}

impl FetchEntriesUseCase {
    pub fn new(loader: Arc<dyn DatasetLoader>) -> Self {
        Self {
            fetch_mapping: FetchMappingUseCase::new(loader),
        }
    }

    pub async fn execute(&self) -> Result<Vec<OuiEntry>, DomainError> {
        let mapping = self.fetch_mapping.execute().await?;
        Ok(entries_from_mapping(mapping))
    }
}
