//! In-memory cutoff source.
//!
//! Serves a fixed set of rows. Useful for:
//! - Embedding a table that was fetched and parsed elsewhere
//! - Tests and demonstrations

use async_trait::async_trait;

use crate::domain::cutoff::RawCutoffRow;
use crate::ports::{CutoffSource, SourceError};

/// In-memory implementation of the CutoffSource port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCutoffSource {
    rows: Vec<RawCutoffRow>,
    failure: Option<String>,
}

impl InMemoryCutoffSource {
    /// Creates a source serving `rows` in order.
    pub fn new(rows: Vec<RawCutoffRow>) -> Self {
        Self {
            rows,
            failure: None,
        }
    }

    /// Creates a source from a JSON array of row objects keyed by column header.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` if the value is not an array of objects.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SourceError> {
        let rows: Vec<RawCutoffRow> = serde_json::from_value(value)?;
        Ok(Self::new(rows))
    }

    /// Creates a source whose every load fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl CutoffSource for InMemoryCutoffSource {
    async fn load(&self) -> Result<Vec<RawCutoffRow>, SourceError> {
        if let Some(reason) = &self.failure {
            return Err(SourceError::Unavailable(reason.clone()));
        }
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} rows)", self.rows.len())
    }
}
