pub mod generation;
pub mod lookup;

// Re-export use cases
pub use generation::{GenerateDatasetUseCase, GenerationReport};
pub use lookup::{FetchEntriesUseCase, FetchMappingUseCase};
