//! Cutoff module - The record model and ingestion normalization.
//!
//! # Components
//!
//! - `RawCutoffRow` - Loader-facing row keyed by the published column headers
//! - `CutoffRecord` - Typed, normalized row consumed by every derivation
//! - `CutoffDataset` - One immutable generation of records

mod dataset;
mod raw;
mod record;

pub use dataset::CutoffDataset;
pub use raw::RawCutoffRow;
pub use record::CutoffRecord;
