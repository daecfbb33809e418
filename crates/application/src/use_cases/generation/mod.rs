pub mod generate_dataset;

pub use generate_dataset::{GenerateDatasetUseCase, GenerationReport};
