//! LoadDatasetHandler - Command handler for loading a dataset generation.
//!
//! Pulls the raw table from a `CutoffSource`, normalizes every row and
//! returns the records as one shared, immutable dataset.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::cutoff::CutoffDataset;
use crate::ports::{CutoffSource, SourceError};

/// Handler for loading the cutoff table.
pub struct LoadDatasetHandler {
    source: Arc<dyn CutoffSource>,
}

impl LoadDatasetHandler {
    pub fn new(source: Arc<dyn CutoffSource>) -> Self {
        Self { source }
    }

    /// Loads and normalizes a fresh dataset.
    ///
    /// Rows without a usable round are dropped, not fatal.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the source cannot produce its rows.
    pub async fn handle(&self) -> Result<Arc<CutoffDataset>, SourceError> {
        let origin = self.source.describe();
        let rows = self.source.load().await.map_err(|err| {
            warn!(source = %origin, error = %err, "Failed to load cutoff rows");
            err
        })?;

        let dataset = CutoffDataset::from_raw_rows(&rows);
        info!(
            source = %origin,
            dataset_id = %dataset.id(),
            loaded_at = %dataset.loaded_at(),
            records = dataset.len(),
            dropped = dataset.dropped_rows(),
            "Cutoff dataset loaded"
        );

        Ok(Arc::new(dataset))
    }
}
