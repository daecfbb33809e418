mod dataset_loader;
mod dataset_writer;
mod oui_feed;

pub use dataset_loader::DatasetLoader;
pub use dataset_writer::DatasetWriter;
pub use oui_feed::OuiFeed;
