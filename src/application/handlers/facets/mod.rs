//! Facet handlers.
//!
//! Cascading selection: applying a change to the chain and listing the
//! options that remain valid under it.

mod get_facet_options;
mod select_facet;

pub use get_facet_options::{GetFacetOptionsHandler, GetFacetOptionsQuery, GetFacetOptionsResult};
pub use select_facet::{SelectFacetCommand, SelectFacetHandler, SelectFacetResult};
