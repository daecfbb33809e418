use crate::ports::{DatasetWriter, OuiFeed};
use oui_data_domain::{DomainError, OuiEntry, OuiMapping};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub destination: String,
    pub entries: usize,
    pub skipped: usize,
}

/// Use case: Regenerate the bundled dataset from the upstream feed
///
/// Runs offline. A feed failure aborts before anything is written, so the
/// previously published dataset stays untouched.
pub struct GenerateDatasetUseCase {
    feed: Arc<dyn OuiFeed>,
    writer: Arc<dyn DatasetWriter>,
}

impl GenerateDatasetUseCase {
    pub fn new(feed: Arc<dyn OuiFeed>, writer: Arc<dyn DatasetWriter>) -> Self {
        Self { feed, writer }
    }

    pub async fn execute(&self) -> Result<GenerationReport, DomainError> {
        let source = self.feed.describe();
        info!(source = %source, "Fetching OUI feed");

        let fetched = self.feed.fetch().await?;
        let total = fetched.len();

        let mapping = retain_valid(fetched);
        let skipped = total - mapping.len();
        if skipped > 0 {
            warn!(skipped, "Dropped feed entries with invalid OUI or empty company info");
        }

        if mapping.is_empty() {
            return Err(DomainError::FeedError(format!(
                "{} returned no usable OUI entries",
                source
            )));
        }

        let destination = self.writer.write(&mapping).await?;
        info!(
            entries = mapping.len(),
            destination = %destination,
            "Generated OUI dataset"
        );

        Ok(GenerationReport {
            destination,
            entries: mapping.len(),
            skipped,
        })
    }
}

fn retain_valid(mut mapping: OuiMapping) -> OuiMapping {
    mapping.retain(|id, company_info| {
        OuiEntry::validate_id(id).is_ok() && OuiEntry::validate_company_info(id, company_info).is_ok()
    });
    mapping
}
