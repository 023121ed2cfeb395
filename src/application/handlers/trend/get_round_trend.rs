//! GetRoundTrendHandler - Query handler for the single-selection trend view.
//!
//! Filters the dataset by the current selection, collapses the matches into
//! one point per round and summarizes the first-vs-last movement.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::cutoff::CutoffDataset;
use crate::domain::facets::{FilterEngine, FilterState};
use crate::domain::trend::{DeltaCalculator, RoundSeries, RoundSeriesBuilder, TrendDelta};

/// Query for the trend of a selection.
#[derive(Debug, Clone, Default)]
pub struct GetRoundTrendQuery {
    pub state: FilterState,
}

/// Trend of one selection across rounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTrendView {
    /// Number of records matching the selection before round collapsing.
    pub matched_records: usize,
    pub series: RoundSeries,
    /// At least two rounds are present.
    pub has_trend: bool,
    /// `None` when no round matched.
    pub delta: Option<TrendDelta>,
}

/// Handler for single-selection trend queries.
pub struct GetRoundTrendHandler {
    dataset: Arc<CutoffDataset>,
}

impl GetRoundTrendHandler {
    pub fn new(dataset: Arc<CutoffDataset>) -> Self {
        Self { dataset }
    }

    pub fn handle(&self, query: GetRoundTrendQuery) -> RoundTrendView {
        let matched = FilterEngine::apply(self.dataset.records(), &query.state);
        let matched_records = matched.len();
        let series = RoundSeriesBuilder::build(matched);
        let delta = DeltaCalculator::summarize(&series);

        debug!(
            matched = matched_records,
            rounds = series.len(),
            "Round trend computed"
        );

        RoundTrendView {
            matched_records,
            has_trend: series.has_trend(),
            series,
            delta,
        }
    }
}
