pub mod fetch_entries;
pub mod fetch_mapping;

pub use fetch_entries::FetchEntriesUseCase;
pub use fetch_mapping::FetchMappingUseCase;
