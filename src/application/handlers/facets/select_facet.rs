//! SelectFacetHandler - Command handler for changing one facet selection.
//!
//! Applies the chain reset and tells the caller which facet to offer next.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::cutoff::CutoffDataset;
use crate::domain::facets::{FacetChange, FacetResolver, FilterState};
use crate::domain::foundation::Facet;

/// Command to select or clear a facet value.
#[derive(Debug, Clone)]
pub struct SelectFacetCommand {
    /// The selection before the change.
    pub state: FilterState,
    /// The change to apply.
    pub change: FacetChange,
}

/// Result of applying a facet change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectFacetResult {
    /// Selection after the change and its downstream reset.
    pub state: FilterState,
    /// First facet in the chain still unselected, if any.
    pub next_facet: Option<Facet>,
    /// Valid options for `next_facet` (empty when the selection is complete).
    pub next_options: Vec<String>,
}

/// Handler for facet selection changes.
pub struct SelectFacetHandler {
    dataset: Arc<CutoffDataset>,
}

impl SelectFacetHandler {
    pub fn new(dataset: Arc<CutoffDataset>) -> Self {
        Self { dataset }
    }

    pub fn handle(&self, cmd: SelectFacetCommand) -> SelectFacetResult {
        let state = cmd.state.apply(&cmd.change);
        let next_facet = state.first_unselected();
        let next_options = next_facet
            .map(|facet| FacetResolver::resolve(self.dataset.records(), facet, &state))
            .unwrap_or_default();

        debug!(
            facet = %cmd.change.facet(),
            next = ?next_facet,
            options = next_options.len(),
            "Facet selection changed"
        );

        SelectFacetResult {
            state,
            next_facet,
            next_options,
        }
    }
}
