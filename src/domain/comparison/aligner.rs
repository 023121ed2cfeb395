//! Comparison Aligner - Merges entry series into round-indexed sparse rows.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

use super::{ComparisonEntry, ComparisonKey};
use crate::domain::trend::{DeltaCalculator, TrendDelta};

/// Field name holding an entry's opening rank in an aligned row.
pub fn opening_field(column: &str) -> String {
    format!("{}-opening", column)
}

/// Field name holding an entry's closing rank in an aligned row.
pub fn closing_field(column: &str) -> String {
    format!("{}-closing", column)
}

/// One round's ranks across every entry that has data for it.
///
/// An entry without data for the round has no field at all; a missing field
/// means "no data", never rank zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedRow {
    pub round: u32,
    #[serde(flatten)]
    pub values: BTreeMap<String, u32>,
}

impl AlignedRow {
    pub fn opening(&self, column: &str) -> Option<u32> {
        self.values.get(&opening_field(column)).copied()
    }

    pub fn closing(&self, column: &str) -> Option<u32> {
        self.values.get(&closing_field(column)).copied()
    }

    /// True if the row carries any field for `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.opening(column).is_some() || self.closing(column).is_some()
    }
}

/// Delta summary for one pinned entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDelta {
    pub key: ComparisonKey,
    pub column: String,
    pub display_name: String,
    /// `None` only for an entry with an empty series.
    pub delta: Option<TrendDelta>,
}

/// Alignment of several entries' series.
pub struct ComparisonAligner;

impl ComparisonAligner {
    /// Column name each entry's fields are published under, in entry order.
    ///
    /// The short name is used when it is unique among the entries. When a
    /// later entry repeats an earlier short name (the same program at two
    /// institutes), it falls back to its display name, and if that repeats
    /// too, to the display name suffixed with its color index.
    pub fn columns(entries: &[ComparisonEntry]) -> Vec<String> {
        let mut taken: HashSet<String> = HashSet::new();
        entries
            .iter()
            .map(|entry| {
                let column = [
                    entry.short_name.clone(),
                    entry.display_name.clone(),
                    format!("{} #{}", entry.display_name, entry.color_index),
                ]
                .into_iter()
                .find(|candidate| !taken.contains(candidate))
                .unwrap_or_else(|| entry.key.to_string());

                if column != entry.short_name {
                    debug!(key = %entry.key, column = %column, "Short name already in use, disambiguating column");
                }
                taken.insert(column.clone());
                column
            })
            .collect()
    }

    /// Builds one row per round in the union of all entries' rounds.
    ///
    /// # Algorithm
    /// The set of rounds is whatever rounds actually occur in the entries,
    /// ascending; no fixed round count is assumed. For each round, every
    /// entry with a point there contributes `{column}-opening` and
    /// `{column}-closing` for the ranks it has.
    ///
    /// # Edge Cases
    /// - No entries: Returns empty Vec
    /// - Point with absent rank: That field is omitted
    pub fn align(entries: &[ComparisonEntry]) -> Vec<AlignedRow> {
        let columns = Self::columns(entries);
        let rounds: BTreeSet<u32> = entries
            .iter()
            .flat_map(|entry| entry.series.rounds())
            .collect();

        rounds
            .into_iter()
            .map(|round| {
                let mut values = BTreeMap::new();
                for (entry, column) in entries.iter().zip(&columns) {
                    let Some(point) = entry.series.get(round) else {
                        continue;
                    };
                    if let Some(rank) = point.opening_rank {
                        values.insert(opening_field(column), rank.value());
                    }
                    if let Some(rank) = point.closing_rank {
                        values.insert(closing_field(column), rank.value());
                    }
                }
                AlignedRow { round, values }
            })
            .collect()
    }

    /// First-vs-last round deltas for every entry, in entry order.
    pub fn deltas(entries: &[ComparisonEntry]) -> Vec<EntryDelta> {
        entries
            .iter()
            .zip(Self::columns(entries))
            .map(|(entry, column)| EntryDelta {
                key: entry.key.clone(),
                column,
                display_name: entry.display_name.clone(),
                delta: DeltaCalculator::summarize(&entry.series),
            })
            .collect()
    }
}
