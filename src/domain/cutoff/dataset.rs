//! CutoffDataset - One immutable generation of normalized records.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{CutoffRecord, RawCutoffRow};
use crate::domain::foundation::{DatasetId, Timestamp};

/// A loaded generation of the cutoff table.
///
/// Records are shared read-only across every derivation; nothing mutates a
/// record after ingestion. Reloading the source yields a new dataset with a
/// new [`DatasetId`].
#[derive(Debug, Clone)]
pub struct CutoffDataset {
    id: DatasetId,
    loaded_at: Timestamp,
    records: Arc<[CutoffRecord]>,
    dropped_rows: usize,
}

impl CutoffDataset {
    /// Creates a dataset from already-normalized records.
    pub fn from_records(records: Vec<CutoffRecord>) -> Self {
        Self {
            id: DatasetId::new(),
            loaded_at: Timestamp::now(),
            records: records.into(),
            dropped_rows: 0,
        }
    }

    /// Normalizes loader rows into a dataset.
    ///
    /// Rows that cannot be normalized (no usable round) are dropped and
    /// counted; they never abort ingestion.
    pub fn from_raw_rows(rows: &[RawCutoffRow]) -> Self {
        let mut records = Vec::with_capacity(rows.len());
        let mut dropped_rows = 0;

        for (index, row) in rows.iter().enumerate() {
            match row.normalize() {
                Ok(record) => records.push(record),
                Err(err) => {
                    dropped_rows += 1;
                    warn!(row = index, error = %err, "Dropping unusable cutoff row");
                }
            }
        }

        let dataset = Self {
            dropped_rows,
            ..Self::from_records(records)
        };
        debug!(
            dataset_id = %dataset.id,
            records = dataset.len(),
            dropped = dropped_rows,
            "Normalized cutoff rows"
        );
        dataset
    }

    /// Returns the generation identifier.
    pub fn id(&self) -> DatasetId {
        self.id
    }

    /// Returns when this generation was loaded.
    pub fn loaded_at(&self) -> Timestamp {
        self.loaded_at
    }

    /// Returns the normalized records in source order.
    pub fn records(&self) -> &[CutoffRecord] {
        &self.records
    }

    /// Returns the number of rows rejected during normalization.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CutoffDataset {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}
