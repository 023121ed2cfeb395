//! GetFacetOptionsHandler - Query handler for cascading option lists.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::cutoff::CutoffDataset;
use crate::domain::facets::{FacetOptions, FacetResolver, FilterState};
use crate::domain::foundation::Facet;

/// Query for the options still valid under a selection.
#[derive(Debug, Clone, Default)]
pub struct GetFacetOptionsQuery {
    /// Current selection.
    pub state: FilterState,
    /// A single facet to resolve; `None` resolves the whole chain.
    pub facet: Option<Facet>,
}

/// Option list(s) for the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "camelCase")]
pub enum GetFacetOptionsResult {
    Single { facet: Facet, options: Vec<String> },
    All { options: FacetOptions },
}

impl GetFacetOptionsResult {
    /// Options for `facet`, empty if the result does not cover it.
    pub fn options(&self, facet: Facet) -> &[String] {
        match self {
            GetFacetOptionsResult::Single { facet: f, options } if *f == facet => options.as_slice(),
            GetFacetOptionsResult::Single { .. } => &[],
            GetFacetOptionsResult::All { options } => options.get(facet),
        }
    }
}

/// Handler for option-list queries.
pub struct GetFacetOptionsHandler {
    dataset: Arc<CutoffDataset>,
}

impl GetFacetOptionsHandler {
    pub fn new(dataset: Arc<CutoffDataset>) -> Self {
        Self { dataset }
    }

    pub fn handle(&self, query: GetFacetOptionsQuery) -> GetFacetOptionsResult {
        let records = self.dataset.records();
        match query.facet {
            Some(facet) => GetFacetOptionsResult::Single {
                facet,
                options: FacetResolver::resolve(records, facet, &query.state),
            },
            None => GetFacetOptionsResult::All {
                options: FacetResolver::resolve_all(records, &query.state),
            },
        }
    }
}
