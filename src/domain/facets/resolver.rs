//! Facet Resolver - Which values remain valid for a facet under a selection.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::{FacetChain, FilterEngine, FilterState};
use crate::domain::cutoff::CutoffRecord;
use crate::domain::foundation::Facet;

/// Option lists for every facet in the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetOptions(BTreeMap<Facet, Vec<String>>);

impl FacetOptions {
    /// Returns the options for a facet (empty if none).
    pub fn get(&self, facet: Facet) -> &[String] {
        self.0.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates facets and their options in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &[String])> + '_ {
        FacetChain::all()
            .iter()
            .map(move |&facet| (facet, self.get(facet)))
    }
}

/// Cascading facet option resolution.
pub struct FacetResolver;

impl FacetResolver {
    /// Returns the sorted distinct values of `field` under `state`.
    ///
    /// # Algorithm
    /// Only selections strictly before `field` in the chain are applied as
    /// predicates; selections at or after `field` are ignored so the answer
    /// never depends on stale downstream choices. Surviving records are
    /// projected onto `field`, absent values dropped, the rest deduplicated
    /// and sorted ascending.
    ///
    /// # Edge Cases
    /// - Empty records: Returns empty Vec
    /// - No upstream selection: Returns the global distinct values of `field`
    pub fn resolve(records: &[CutoffRecord], field: Facet, state: &FilterState) -> Vec<String> {
        let predicates = state.upstream_selections(field);

        records
            .iter()
            .filter(|record| FilterEngine::matches_all(record, &predicates))
            .filter_map(|record| record.facet(field))
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Returns the distinct values of `field` across all records.
    pub fn global_options(records: &[CutoffRecord], field: Facet) -> Vec<String> {
        Self::resolve(records, field, &FilterState::new())
    }

    /// Resolves every facet in the chain under `state`.
    pub fn resolve_all(records: &[CutoffRecord], state: &FilterState) -> FacetOptions {
        FacetOptions(
            FacetChain::all()
                .iter()
                .map(|&facet| (facet, Self::resolve(records, facet, state)))
                .collect(),
        )
    }
}
