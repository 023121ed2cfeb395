//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `cutoff` - Record model, ingestion normalization, dataset generations
//! - `facets` - Facet chain, filter state, option resolution, filtering
//! - `trend` - Round series and first-vs-last deltas
//! - `comparison` - Pinned selections, registry, aligned comparison rows

pub mod comparison;
pub mod cutoff;
pub mod facets;
pub mod foundation;
pub mod trend;
