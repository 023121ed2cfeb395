//! RemoveComparisonHandler - Command handler for unpinning one entry.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::comparison::{ComparisonEntry, ComparisonKey};
use crate::ports::ComparisonStore;

/// Command to unpin the entry with `key`.
#[derive(Debug, Clone)]
pub struct RemoveComparisonCommand {
    pub key: ComparisonKey,
}

/// Result of a removal. Removing an unknown key is a no-op, not an error.
#[derive(Debug, Clone)]
pub struct RemoveComparisonResult {
    pub removed: Option<ComparisonEntry>,
    /// Whether comparison mode is still active afterwards.
    pub active: bool,
}

/// Handler for removing comparison entries.
pub struct RemoveComparisonHandler {
    store: Arc<dyn ComparisonStore>,
}

impl RemoveComparisonHandler {
    pub fn new(store: Arc<dyn ComparisonStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: RemoveComparisonCommand) -> RemoveComparisonResult {
        let removal = self.store.remove(&cmd.key);
        match &removal.removed {
            Some(entry) => info!(key = %entry.key, remaining = removal.remaining, "Comparison entry removed"),
            None => debug!(key = %cmd.key, "No comparison entry to remove"),
        }

        RemoveComparisonResult {
            active: removal.is_active(),
            removed: removal.removed,
        }
    }
}
