mod bundled;
mod embedded;
mod file;

pub use bundled::BundledOuiData;
pub use embedded::{EmbeddedDatasetLoader, EmbeddedResource, BUNDLED_RESOURCES};
pub use file::FileDatasetLoader;
