//! Dataset handlers.

mod load_dataset;

pub use load_dataset::LoadDatasetHandler;
