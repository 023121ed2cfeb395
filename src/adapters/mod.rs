//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-process implementations of every port

pub mod memory;

pub use memory::{InMemoryComparisonStore, InMemoryCutoffSource};
