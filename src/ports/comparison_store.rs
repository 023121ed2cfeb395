//! ComparisonStore port - Shared home of the comparison registry.
//!
//! Presentation layers may fire rapid, overlapping add/remove/reset requests.
//! A store applies each mutation as one serializable step and never exposes
//! a half-applied registry to readers.

use crate::domain::comparison::{
    ComparisonCandidate, ComparisonEntry, ComparisonKey, ComparisonRejected,
};

/// Outcome of a removal, observed under the same critical section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRemoval {
    /// The removed entry; `None` if the key was not pinned.
    pub removed: Option<ComparisonEntry>,
    /// Entries left after the removal.
    pub remaining: usize,
}

impl ComparisonRemoval {
    /// True while entries remain after the removal.
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }
}

/// Port for the comparison registry.
///
/// Candidates arrive with their series already computed, so implementations
/// only perform the duplicate check and insertion inside their critical
/// section.
pub trait ComparisonStore: Send + Sync {
    /// Pins a prepared candidate.
    ///
    /// Returns `DuplicateEntry` if its key is already pinned.
    fn insert(&self, candidate: ComparisonCandidate) -> Result<ComparisonEntry, ComparisonRejected>;

    /// Removes an entry and reports how many remain, in one step.
    fn remove(&self, key: &ComparisonKey) -> ComparisonRemoval;

    /// Removes every entry in one step.
    fn reset(&self);

    /// Consistent copy of the entries in insertion order.
    fn entries(&self) -> Vec<ComparisonEntry>;

    fn contains(&self, key: &ComparisonKey) -> bool;

    fn count(&self) -> usize;

    /// True while at least one entry is pinned.
    fn is_active(&self) -> bool {
        self.count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ComparisonStore) {}
}
