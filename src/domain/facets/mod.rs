//! Facets Module - Cascading selection over the facet chain.
//!
//! # Components
//!
//! - `FacetChain` - Fixed dependency order between facets
//! - `FilterState` - Current selection with chain-reset transitions
//! - `FacetResolver` - Still-valid options for a facet given upstream choices
//! - `FilterEngine` - Records matching a selection
//!
//! All functions are pure; selections are values, and every transition
//! returns a new `FilterState`.

mod chain;
mod filter;
mod filter_state;
mod resolver;

pub use chain::FacetChain;
pub use filter::FilterEngine;
pub use filter_state::{FacetChange, FilterState};
pub use resolver::{FacetOptions, FacetResolver};
