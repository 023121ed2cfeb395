//! Delta Calculator - First-round versus last-round rank movement.

use serde::Serialize;

use super::RoundSeries;
use crate::domain::foundation::Rank;

/// Change of one rank kind between the first and last round.
///
/// `diff` is `first - last`: a positive value means the rank number went
/// down (improved) over the rounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RankDelta {
    Available {
        first: u32,
        last: u32,
        diff: i64,
        /// Percentage of the first value, one decimal place.
        percent: f64,
    },
    /// An endpoint is missing or the first value is zero.
    Unavailable,
}

impl RankDelta {
    pub fn is_available(&self) -> bool {
        matches!(self, RankDelta::Available { .. })
    }

    pub fn diff(&self) -> Option<i64> {
        match self {
            RankDelta::Available { diff, .. } => Some(*diff),
            RankDelta::Unavailable => None,
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            RankDelta::Available { percent, .. } => Some(*percent),
            RankDelta::Unavailable => None,
        }
    }

    /// True when the rank number decreased from first to last round.
    pub fn is_improvement(&self) -> bool {
        self.diff().is_some_and(|d| d > 0)
    }
}

/// Opening and closing deltas between the extreme rounds of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDelta {
    pub first_round: u32,
    pub last_round: u32,
    pub opening: RankDelta,
    pub closing: RankDelta,
}

/// Delta computations over round series.
pub struct DeltaCalculator;

impl DeltaCalculator {
    /// Summarizes the movement between the minimum and maximum round.
    ///
    /// The endpoints are whatever rounds exist, not fixed round numbers.
    /// Returns `None` for an empty series. A single-point series compares
    /// the round with itself.
    pub fn summarize(series: &RoundSeries) -> Option<TrendDelta> {
        let first = series.first()?;
        let last = series.last()?;

        Some(TrendDelta {
            first_round: first.round,
            last_round: last.round,
            opening: Self::rank_delta(first.opening_rank, last.opening_rank),
            closing: Self::rank_delta(first.closing_rank, last.closing_rank),
        })
    }

    /// Delta between two optional rank endpoints.
    pub fn rank_delta(first: Option<Rank>, last: Option<Rank>) -> RankDelta {
        let (Some(first), Some(last)) = (first, last) else {
            return RankDelta::Unavailable;
        };
        let (first, last) = (first.value(), last.value());
        let diff = i64::from(first) - i64::from(last);

        match Self::percent_change(i64::from(first), diff) {
            Some(percent) => RankDelta::Available {
                first,
                last,
                diff,
                percent,
            },
            None => RankDelta::Unavailable,
        }
    }

    /// `diff / base * 100` rounded to one decimal place.
    ///
    /// Returns `None` when `base` is zero.
    pub fn percent_change(base: i64, diff: i64) -> Option<f64> {
        if base == 0 {
            return None;
        }
        let percent = diff as f64 / base as f64 * 100.0;
        Some((percent * 10.0).round() / 10.0)
    }
}
