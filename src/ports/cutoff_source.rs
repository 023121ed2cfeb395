//! CutoffSource port - Interface for acquiring the raw cutoff table.
//!
//! Network fetches, file reads and CSV parsing belong to adapters; the core
//! only ever sees the rows this port yields.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::cutoff::RawCutoffRow;

/// Port supplying raw rows for one dataset generation.
///
/// Implementations must ensure:
/// - Rows are returned in source order (first-wins deduplication relies on it)
/// - An empty table is `Ok(vec![])`, not an error
///
/// # Example
///
/// ```ignore
/// let rows = source.load().await?;
/// let dataset = CutoffDataset::from_raw_rows(&rows);
/// ```
#[async_trait]
pub trait CutoffSource: Send + Sync {
    /// Loads every row of the table.
    async fn load(&self) -> Result<Vec<RawCutoffRow>, SourceError>;

    /// Human-readable origin of the rows, for logs.
    fn describe(&self) -> String;
}

/// Errors that can occur while acquiring the table.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cutoff source unavailable: {0}")]
    Unavailable(String),

    #[error("Cutoff table could not be parsed: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}
