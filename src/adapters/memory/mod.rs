//! In-memory adapters.
//!
//! Suitable for embedding the engine in a single process and for tests.

mod comparison_store;
mod cutoff_source;

pub use comparison_store::InMemoryComparisonStore;
pub use cutoff_source::InMemoryCutoffSource;
