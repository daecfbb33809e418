use serde::{Deserialize, Serialize};

pub const IEEE_OUI_CSV_URL: &str = "https://standards-oui.ieee.org/oui/oui.csv";

/// The dataset file the infrastructure crate embeds, anchored to this source
/// tree so `generate` writes to the same place from any working directory.
pub const BUNDLED_DATASET_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../infrastructure/resources/oui.json"
);

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// IEEE MA-L registry export (CSV)
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Destination of the generated dataset
    #[serde(default = "default_output_path")]
    pub output_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            output_path: default_output_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_feed_url() -> String {
    IEEE_OUI_CSV_URL.to_string()
}

fn default_output_path() -> String {
    BUNDLED_DATASET_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_user_agent() -> String {
    format!("oui-data/{} (dataset-generator)", env!("CARGO_PKG_VERSION"))
}
