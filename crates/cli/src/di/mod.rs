mod loaders;
mod use_cases;

pub use loaders::dataset_loader;
pub use use_cases::{build_generator, LookupUseCases};
