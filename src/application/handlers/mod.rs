//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod comparison;
pub mod dataset;
pub mod facets;
pub mod trend;

pub use comparison::{
    AddComparisonCommand, AddComparisonHandler, CompareEntriesHandler, ComparisonView,
    RemoveComparisonCommand, RemoveComparisonHandler, RemoveComparisonResult,
    ResetComparisonHandler,
};
pub use dataset::LoadDatasetHandler;
pub use facets::{
    GetFacetOptionsHandler, GetFacetOptionsQuery, GetFacetOptionsResult, SelectFacetCommand,
    SelectFacetHandler, SelectFacetResult,
};
pub use trend::{GetRoundTrendHandler, GetRoundTrendQuery, RoundTrendView};
