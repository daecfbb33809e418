use super::dataset_loader;
use oui_data_application::ports::OuiFeed;
use oui_data_application::use_cases::{
    FetchEntriesUseCase, FetchMappingUseCase, GenerateDatasetUseCase,
};
use oui_data_domain::{Config, DomainError};
use oui_data_infrastructure::{HttpOuiFeed, JsonFileDatasetWriter, LocalCsvFeed};
use std::sync::Arc;

pub struct LookupUseCases {
    pub fetch_mapping: Arc<FetchMappingUseCase>,
    pub fetch_entries: Arc<FetchEntriesUseCase>,
}

impl LookupUseCases {
    pub fn new(config: &Config) -> Self {
        let loader = dataset_loader(config);

        Self {
            fetch_mapping: Arc::new(FetchMappingUseCase::new(loader.clone())),
            fetch_entries: Arc::new(FetchEntriesUseCase::new(loader)),
        }
    }
}

/// `input` selects a local registry CSV; otherwise the configured URL is downloaded.
pub fn build_generator(
    config: &Config,
    input: Option<String>,
) -> Result<GenerateDatasetUseCase, DomainError> {
    let feed: Arc<dyn OuiFeed> = match input {
        Some(path) => Arc::new(LocalCsvFeed::new(path)),
        None => Arc::new(HttpOuiFeed::from_config(&config.generator)?),
    };
    let writer = Arc::new(JsonFileDatasetWriter::new(&config.generator.output_path));

    Ok(GenerateDatasetUseCase::new(feed, writer))
}
