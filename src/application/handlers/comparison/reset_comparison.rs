//! ResetComparisonHandler - Command handler for leaving comparison mode.

use std::sync::Arc;

use tracing::info;

use crate::ports::ComparisonStore;

/// Handler that clears every pinned entry in one step.
pub struct ResetComparisonHandler {
    store: Arc<dyn ComparisonStore>,
}

impl ResetComparisonHandler {
    pub fn new(store: Arc<dyn ComparisonStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self) {
        self.store.reset();
        info!("Comparison registry reset");
    }
}
