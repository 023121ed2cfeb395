//! In-memory comparison store.
//!
//! Wraps a [`ComparisonRegistry`] in an `RwLock`. Each port call takes the
//! lock once, so every mutation is observed either fully applied or not at
//! all.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::comparison::{
    ComparisonCandidate, ComparisonEntry, ComparisonKey, ComparisonRegistry, ComparisonRejected,
};
use crate::ports::{ComparisonRemoval, ComparisonStore};

/// Thread-safe in-memory implementation of the ComparisonStore port.
///
/// A poisoned lock is recovered rather than propagated: registry mutations
/// complete their only write (a push, a remove or a clear) after all
/// fallible work, so the guarded registry is always consistent.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryComparisonStore::new(8);
/// let candidate = ComparisonCandidate::prepare(dataset.records(), &state)?;
/// store.insert(candidate)?;
/// assert!(store.is_active());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryComparisonStore {
    registry: RwLock<ComparisonRegistry>,
}

impl InMemoryComparisonStore {
    /// Creates an empty store cycling through `palette_size` colors.
    pub fn new(palette_size: usize) -> Self {
        Self {
            registry: RwLock::new(ComparisonRegistry::new(palette_size)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ComparisonRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ComparisonRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ComparisonStore for InMemoryComparisonStore {
    fn insert(&self, candidate: ComparisonCandidate) -> Result<ComparisonEntry, ComparisonRejected> {
        self.write().insert(candidate)
    }

    fn remove(&self, key: &ComparisonKey) -> ComparisonRemoval {
        let mut registry = self.write();
        let removed = registry.remove(key);
        ComparisonRemoval {
            removed,
            remaining: registry.len(),
        }
    }

    fn reset(&self) {
        self.write().reset();
    }

    fn entries(&self) -> Vec<ComparisonEntry> {
        self.read().entries().to_vec()
    }

    fn contains(&self, key: &ComparisonKey) -> bool {
        self.read().contains(key)
    }

    fn count(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cutoff::CutoffRecord;
    use crate::domain::facets::FilterState;
    use crate::domain::foundation::Facet;
    use std::sync::Arc;
    use std::thread;

    fn state(program: &str) -> FilterState {
        FilterState::new()
            .select(Facet::CollegeType, "IIIT")
            .select(Facet::Institute, "IIIT Hyderabad")
            .select(Facet::Program, program)
            .select(Facet::Quota, "AI")
            .select(Facet::Category, "OPEN")
            .select(Facet::Gender, "Gender-Neutral")
    }

    fn candidate(program: &str) -> ComparisonCandidate {
        let state = state(program);
        let records: Vec<CutoffRecord> = (1..=3)
            .map(|round| {
                state
                    .selections()
                    .fold(CutoffRecord::new(round), |r, (facet, value)| r.with_facet(facet, value))
                    .with_ranks(Some(round * 10), Some(round * 20))
            })
            .collect();
        ComparisonCandidate::prepare(&records, &state).unwrap()
    }

    #[test]
    fn insert_and_query() {
        let store = InMemoryComparisonStore::new(8);
        let entry = store.insert(candidate("CSE")).unwrap();

        assert_eq!(store.count(), 1);
        assert!(store.is_active());
        assert!(store.contains(&entry.key));
        assert_eq!(store.entries()[0].short_name, "CSE");
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let store = InMemoryComparisonStore::default();
        store.insert(candidate("CSE")).unwrap();

        let result = store.insert(candidate("CSE"));
        assert!(matches!(result, Err(ComparisonRejected::DuplicateEntry { .. })));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn remove_and_reset_deactivate() {
        let store = InMemoryComparisonStore::default();
        let a = store.insert(candidate("CSE")).unwrap();
        store.insert(candidate("ECE")).unwrap();

        let removal = store.remove(&a.key);
        assert!(removal.removed.is_some());
        assert_eq!(removal.remaining, 1);
        assert!(removal.is_active());

        let again = store.remove(&a.key);
        assert!(again.removed.is_none());
        assert_eq!(again.remaining, 1);
        assert_eq!(store.count(), 1);

        store.reset();
        assert!(!store.is_active());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn concurrent_duplicate_inserts_add_exactly_one() {
        let store = Arc::new(InMemoryComparisonStore::default());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert(candidate("CSE")).is_ok())
            })
            .collect();

        let added = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(added, 1);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn concurrent_removals_report_consistent_remaining_counts() {
        let store = Arc::new(InMemoryComparisonStore::default());
        let programs = ["CSE", "ECE", "AI", "Maths", "Physics", "Chemistry"];
        let keys: Vec<ComparisonKey> = programs
            .iter()
            .map(|program| store.insert(candidate(program)).unwrap().key)
            .collect();

        let handles: Vec<_> = keys
            .into_iter()
            .map(|key| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.remove(&key).remaining)
            })
            .collect();

        let mut remaining: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        remaining.sort_unstable();
        assert_eq!(remaining, vec![0, 1, 2, 3, 4, 5]);
        assert!(!store.is_active());
    }

    #[test]
    fn concurrent_distinct_inserts_get_distinct_color_slots() {
        let store = Arc::new(InMemoryComparisonStore::new(8));
        let programs = ["CSE", "ECE", "AI", "Maths"];

        let handles: Vec<_> = programs
            .iter()
            .map(|program| {
                let store = Arc::clone(&store);
                let candidate = candidate(program);
                thread::spawn(move || store.insert(candidate).unwrap().color_index)
            })
            .collect();

        let mut colors: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        colors.sort_unstable();
        assert_eq!(colors, vec![0, 1, 2, 3]);
    }
}
