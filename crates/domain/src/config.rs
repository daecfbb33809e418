pub mod dataset;
pub mod errors;
pub mod generator;
pub mod logging;
pub mod root;

pub use dataset::DatasetConfig;
pub use errors::ConfigError;
pub use generator::GeneratorConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
