//! Round-Series Builder - One ordered point per counseling round.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::cutoff::CutoffRecord;
use crate::domain::foundation::{Rank, ValidationError};

/// Minimum number of rounds needed to show a trend.
pub const MIN_TREND_POINTS: usize = 2;

/// Opening and closing rank for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundPoint {
    pub round: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_rank: Option<Rank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_rank: Option<Rank>,
}

impl RoundPoint {
    fn from_record(record: &CutoffRecord) -> Self {
        Self {
            round: record.round,
            opening_rank: record.opening_rank,
            closing_rank: record.closing_rank,
        }
    }
}

/// Points strictly increasing by round, no duplicate rounds.
///
/// Deserialization rejects any sequence that breaks that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RoundPoint>", into = "Vec<RoundPoint>")]
pub struct RoundSeries(Vec<RoundPoint>);

impl TryFrom<Vec<RoundPoint>> for RoundSeries {
    type Error = ValidationError;

    fn try_from(points: Vec<RoundPoint>) -> Result<Self, Self::Error> {
        if let Some(point) = points.iter().find(|p| p.round == 0) {
            return Err(ValidationError::out_of_range(
                "round",
                1,
                i64::from(u32::MAX),
                i64::from(point.round),
            ));
        }
        if let Some(pair) = points.windows(2).find(|w| w[0].round >= w[1].round) {
            return Err(ValidationError::invalid_format(
                "round",
                format!(
                    "rounds must be strictly increasing, got {} then {}",
                    pair[0].round, pair[1].round
                ),
            ));
        }
        Ok(Self(points))
    }
}

impl From<RoundSeries> for Vec<RoundPoint> {
    fn from(series: RoundSeries) -> Self {
        series.0
    }
}

impl RoundSeries {
    pub fn points(&self) -> &[RoundPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the series has enough rounds to display a trend.
    pub fn has_trend(&self) -> bool {
        self.0.len() >= MIN_TREND_POINTS
    }

    /// Point with the lowest round.
    pub fn first(&self) -> Option<&RoundPoint> {
        self.0.first()
    }

    /// Point with the highest round.
    pub fn last(&self) -> Option<&RoundPoint> {
        self.0.last()
    }

    /// Returns the point for a round, if the series has one.
    pub fn get(&self, round: u32) -> Option<&RoundPoint> {
        self.0
            .binary_search_by_key(&round, |p| p.round)
            .ok()
            .map(|idx| &self.0[idx])
    }

    /// Iterates the rounds present, ascending.
    pub fn rounds(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|p| p.round)
    }
}

/// Collapses a filtered record subset into a round series.
pub struct RoundSeriesBuilder;

impl RoundSeriesBuilder {
    /// Builds the series for a record subset.
    ///
    /// # Algorithm
    /// Group by round; the first record seen for a round wins (later ones
    /// for the same round are ignored, never merged); emit ascending by round.
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty series
    /// - Duplicate rounds: Earliest record in input order is kept
    pub fn build<'a, I>(records: I) -> RoundSeries
    where
        I: IntoIterator<Item = &'a CutoffRecord>,
    {
        let mut by_round: BTreeMap<u32, RoundPoint> = BTreeMap::new();
        for record in records {
            by_round
                .entry(record.round)
                .or_insert_with(|| RoundPoint::from_record(record));
        }
        RoundSeries(by_round.into_values().collect())
    }
}
