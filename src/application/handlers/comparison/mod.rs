//! Comparison handlers.
//!
//! Commands mutate the shared registry through the `ComparisonStore` port;
//! the query reads one consistent snapshot of it and aligns the entries.

mod add_comparison;
mod compare_entries;
mod remove_comparison;
mod reset_comparison;

pub use add_comparison::{AddComparisonCommand, AddComparisonHandler};
pub use compare_entries::{CompareEntriesHandler, ComparisonView};
pub use remove_comparison::{RemoveComparisonCommand, RemoveComparisonHandler, RemoveComparisonResult};
pub use reset_comparison::ResetComparisonHandler;
