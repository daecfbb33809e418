use oui_data_application::ports::DatasetLoader;
use oui_data_domain::Config;
use oui_data_infrastructure::{EmbeddedDatasetLoader, FileDatasetLoader};
use std::sync::Arc;
use tracing::debug;

pub fn dataset_loader(config: &Config) -> Arc<dyn DatasetLoader> {
    match &config.dataset.resource_dir {
        Some(dir) => {
            debug!(resource_dir = %dir, "Reading dataset from resource directory");
            Arc::new(FileDatasetLoader::new(dir))
        }
        None => {
            debug!("Reading embedded dataset");
            Arc::new(EmbeddedDatasetLoader::new())
        }
    }
}
