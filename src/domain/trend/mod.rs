//! Trend Module - Pure derivations over a selected record subset.
//!
//! # Components
//!
//! - `RoundSeriesBuilder` - One point per round, first record wins
//! - `DeltaCalculator` - First-vs-last round difference and percentage
//!
//! Nothing here is cached; every view is recomputed from the records on
//! demand, so there is nothing to invalidate when a selection changes.

mod delta;
mod series;

pub use delta::{DeltaCalculator, RankDelta, TrendDelta};
pub use series::{RoundPoint, RoundSeries, RoundSeriesBuilder, MIN_TREND_POINTS};
