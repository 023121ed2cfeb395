//! AddComparisonHandler - Command handler for pinning a selection.
//!
//! The candidate's series is computed against the dataset before the store
//! is touched; the store then performs only the duplicate check and insert.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::comparison::{ComparisonCandidate, ComparisonEntry, ComparisonKey, ComparisonRejected};
use crate::domain::cutoff::CutoffDataset;
use crate::domain::facets::FilterState;
use crate::ports::ComparisonStore;

/// Command to pin the current selection.
#[derive(Debug, Clone)]
pub struct AddComparisonCommand {
    pub state: FilterState,
}

/// Handler for adding comparison entries.
pub struct AddComparisonHandler {
    dataset: Arc<CutoffDataset>,
    store: Arc<dyn ComparisonStore>,
}

impl AddComparisonHandler {
    pub fn new(dataset: Arc<CutoffDataset>, store: Arc<dyn ComparisonStore>) -> Self {
        Self { dataset, store }
    }

    /// Pins the selection and returns the new entry.
    ///
    /// # Errors
    ///
    /// Returns `ComparisonRejected` if the selection is incomplete, already
    /// pinned, or has fewer than two rounds. The store is left unchanged.
    pub fn handle(&self, cmd: AddComparisonCommand) -> Result<ComparisonEntry, ComparisonRejected> {
        if let Some(key) = ComparisonKey::from_state(&cmd.state) {
            if self.store.contains(&key) {
                warn!(key = %key, "Selection already pinned");
                return Err(ComparisonRejected::DuplicateEntry { key });
            }
        }

        let candidate = ComparisonCandidate::prepare(self.dataset.records(), &cmd.state)
            .map_err(|err| {
                warn!(error = %err, "Selection cannot be pinned");
                err
            })?;

        let entry = self.store.insert(candidate)?;
        info!(
            key = %entry.key,
            color_index = entry.color_index,
            rounds = entry.series.len(),
            "Selection pinned for comparison"
        );
        Ok(entry)
    }
}
