use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Directory holding `oui.json`. When unset the embedded copy is used.
    #[serde(default)]
    pub resource_dir: Option<String>,
}
