//! OUI Data Domain Layer
pub mod config;
pub mod errors;
pub mod oui_entry;
pub mod oui_mapping;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use oui_entry::OuiEntry;
pub use oui_mapping::{entries_from_mapping, OuiMapping, OUI_RESOURCE_NAME};
