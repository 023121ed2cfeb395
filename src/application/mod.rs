//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain derivations and coordinates between ports.
//! Following CQRS, it separates command handlers (registry mutations) from
//! query handlers (option lists, trend and comparison views).

pub mod handlers;

pub use handlers::{
    // Dataset handlers
    LoadDatasetHandler,
    // Facet handlers
    GetFacetOptionsHandler, GetFacetOptionsQuery, GetFacetOptionsResult,
    SelectFacetCommand, SelectFacetHandler, SelectFacetResult,
    // Trend handlers
    GetRoundTrendHandler, GetRoundTrendQuery, RoundTrendView,
    // Comparison handlers
    AddComparisonCommand, AddComparisonHandler,
    CompareEntriesHandler, ComparisonView,
    RemoveComparisonCommand, RemoveComparisonHandler, RemoveComparisonResult,
    ResetComparisonHandler,
};
