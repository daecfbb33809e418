//! OUI Data Infrastructure Layer
//!
//! Adapters for the application ports: dataset loaders (embedded asset table
//! and resource directory), the IEEE registry feeds used by the offline
//! generator, and the JSON dataset writer.
pub mod dataset;
pub mod feed;
pub mod writer;

pub use dataset::{BundledOuiData, EmbeddedDatasetLoader, EmbeddedResource, FileDatasetLoader};
pub use feed::{HttpOuiFeed, LocalCsvFeed};
pub use writer::JsonFileDatasetWriter;
