//! Comparison Module - Side-by-side comparison of pinned selections.
//!
//! # Components
//!
//! - `ComparisonEntry` / `ComparisonKey` - A pinned selection and its identity
//! - `ComparisonRegistry` - Key-unique, ordered set of entries
//! - `ComparisonAligner` - Round-indexed sparse rows and per-entry deltas
//!
//! The registry is the only mutable state in the domain. Entry series are
//! computed by `ComparisonCandidate::prepare` before the registry is touched,
//! so a shared registry can be updated in a single short critical section.

mod aligner;
mod entry;
mod errors;
mod registry;

pub use aligner::{closing_field, opening_field, AlignedRow, ComparisonAligner, EntryDelta};
pub use entry::{institute_label, program_label, ComparisonCandidate, ComparisonEntry, ComparisonKey};
pub use errors::ComparisonRejected;
pub use registry::{ComparisonRegistry, DEFAULT_PALETTE_SIZE};
