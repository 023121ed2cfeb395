//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CutoffSource` - Supplies raw cutoff rows (fetching and parsing live
//!   behind this port, outside the core)
//! - `ComparisonStore` - Holds the comparison registry shared between
//!   concurrent callers

mod comparison_store;
mod cutoff_source;

pub use comparison_store::{ComparisonRemoval, ComparisonStore};
pub use cutoff_source::{CutoffSource, SourceError};
