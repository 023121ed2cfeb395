//! CompareEntriesHandler - Query handler for the multi-selection view.
//!
//! Returns pinned entries side by side: one row per round present in any
//! entry, plus each entry's first-vs-last round delta.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::comparison::{AlignedRow, ComparisonAligner, ComparisonEntry, EntryDelta};
use crate::ports::ComparisonStore;

/// Side-by-side view of every pinned entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub entries: Vec<ComparisonEntry>,
    /// Column name each entry's row fields use, in entry order.
    pub columns: Vec<String>,
    pub rows: Vec<AlignedRow>,
    pub deltas: Vec<EntryDelta>,
    pub active: bool,
}

/// Handler for comparison view queries.
pub struct CompareEntriesHandler {
    store: Arc<dyn ComparisonStore>,
}

impl CompareEntriesHandler {
    pub fn new(store: Arc<dyn ComparisonStore>) -> Self {
        Self { store }
    }

    /// Builds the view from one snapshot of the store.
    pub fn handle(&self) -> ComparisonView {
        let entries = self.store.entries();
        let columns = ComparisonAligner::columns(&entries);
        let rows = ComparisonAligner::align(&entries);
        let deltas = ComparisonAligner::deltas(&entries);

        debug!(entries = entries.len(), rows = rows.len(), "Comparison view built");

        ComparisonView {
            active: !entries.is_empty(),
            entries,
            columns,
            rows,
            deltas,
        }
    }
}
