use async_trait::async_trait;
use oui_data_application::ports::DatasetLoader;
use oui_data_domain::{DomainError, OUI_RESOURCE_NAME};
use tracing::debug;

/// A named file compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResource {
    pub name: &'static str,
    pub bytes: &'static [u8],
}

/// Resources bundled with the library, embedded at compile time.
pub static BUNDLED_RESOURCES: &[EmbeddedResource] = &[EmbeddedResource {
    name: OUI_RESOURCE_NAME,
    bytes: include_bytes!("../../resources/oui.json"),
}];

/// Reads `oui.json` out of an embedded resource table.
pub struct EmbeddedDatasetLoader {
    resources: &'static [EmbeddedResource],
    name: &'static str,
}

impl EmbeddedDatasetLoader {
    pub fn new() -> Self {
        Self::with_resources(BUNDLED_RESOURCES)
    }

    pub fn with_resources(resources: &'static [EmbeddedResource]) -> Self {
        Self {
            resources,
            name: OUI_RESOURCE_NAME,
        }
    }

    fn find(&self) -> Option<&'static EmbeddedResource> {
        self.resources.iter().find(|r| r.name == self.name)
    }
}

impl Default for EmbeddedDatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetLoader for EmbeddedDatasetLoader {
    async fn load_raw_data(&self) -> Result<Vec<u8>, DomainError> {
        let resource = self
            .find()
            .ok_or_else(|| DomainError::ResourceNotFound(self.name.to_string()))?;

        debug!(
            resource = resource.name,
            bytes = resource.bytes.len(),
            "Embedded resource resolved"
        );
        Ok(resource.bytes.to_vec())
    }
}
