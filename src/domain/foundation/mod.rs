//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the cutoff trend domain.

mod errors;
mod facet;
mod ids;
mod rank;
mod timestamp;

pub use errors::ValidationError;
pub use facet::Facet;
pub use ids::DatasetId;
pub use rank::Rank;
pub use timestamp::Timestamp;
