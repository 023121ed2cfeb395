//! Filter Engine - Applies a filter state to the record set.

use super::FilterState;
use crate::domain::cutoff::CutoffRecord;
use crate::domain::foundation::Facet;

/// Equality-predicate filtering over cutoff records.
pub struct FilterEngine;

impl FilterEngine {
    /// Returns the records matching every set facet, in original order.
    ///
    /// Unselected facets impose no constraint. A record whose facet is absent
    /// never matches a selection on that facet.
    ///
    /// # Edge Cases
    /// - Empty records: Returns empty Vec
    /// - Empty state: Returns every record
    /// - Nothing matches: Returns empty Vec
    pub fn apply<'a>(records: &'a [CutoffRecord], state: &FilterState) -> Vec<&'a CutoffRecord> {
        let predicates: Vec<(Facet, &str)> = state.selections().collect();
        Self::apply_predicates(records, &predicates)
    }

    /// Returns the records matching every `(facet, value)` predicate.
    pub fn apply_predicates<'a>(
        records: &'a [CutoffRecord],
        predicates: &[(Facet, &str)],
    ) -> Vec<&'a CutoffRecord> {
        records
            .iter()
            .filter(|record| Self::matches_all(record, predicates))
            .collect()
    }

    /// True if the record satisfies every predicate.
    pub fn matches_all(record: &CutoffRecord, predicates: &[(Facet, &str)]) -> bool {
        predicates
            .iter()
            .all(|(facet, value)| record.matches(*facet, value))
    }
}
