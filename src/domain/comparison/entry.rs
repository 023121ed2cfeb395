//! ComparisonEntry - A fully specified selection pinned for comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ComparisonRejected;
use crate::domain::cutoff::CutoffRecord;
use crate::domain::facets::{FacetChain, FilterEngine, FilterState};
use crate::domain::foundation::Facet;
use crate::domain::trend::{RoundSeries, RoundSeriesBuilder, MIN_TREND_POINTS};

const KEY_SEPARATOR: &str = "|";

/// Identity of a pinned selection: the six facet values in chain order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonKey(String);

impl ComparisonKey {
    /// Builds the key for a fully specified state, or `None` otherwise.
    ///
    /// Separators and backslashes inside values are backslash-escaped, so
    /// distinct selections never share a key.
    pub fn from_state(state: &FilterState) -> Option<Self> {
        state.chain_values().map(|values| {
            let escaped: Vec<String> = values.into_iter().map(escape_segment).collect();
            Self(escaped.join(KEY_SEPARATOR))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComparisonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn escape_segment(value: &str) -> String {
    value.replace('\\', "\\\\").replace(KEY_SEPARATOR, "\\|")
}

/// Institute name up to its first comma, trimmed.
pub fn institute_label(institute: &str) -> &str {
    leading_segment(institute, ',')
}

/// Program name up to its first parenthesis, trimmed.
pub fn program_label(program: &str) -> &str {
    leading_segment(program, '(')
}

fn leading_segment(value: &str, delimiter: char) -> &str {
    value.split(delimiter).next().unwrap_or(value).trim()
}

/// A selection whose series has been computed but which is not yet in a
/// registry. Computing it needs no access to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonCandidate {
    pub key: ComparisonKey,
    pub display_name: String,
    pub short_name: String,
    pub selection: FilterState,
    pub series: RoundSeries,
}

impl ComparisonCandidate {
    /// Validates a selection and builds its series.
    ///
    /// # Errors
    ///
    /// - `IncompleteSelection` if any facet is unselected
    /// - `InsufficientRounds` if the series has fewer than two points
    pub fn prepare(records: &[CutoffRecord], state: &FilterState) -> Result<Self, ComparisonRejected> {
        let Some(key) = ComparisonKey::from_state(state) else {
            let missing = state.first_unselected().unwrap_or_else(FacetChain::first);
            return Err(ComparisonRejected::IncompleteSelection { missing });
        };

        let series = RoundSeriesBuilder::build(FilterEngine::apply(records, state));
        if !series.has_trend() {
            return Err(ComparisonRejected::InsufficientRounds {
                found: series.len(),
                required: MIN_TREND_POINTS,
            });
        }

        let institute = institute_label(state.get(Facet::Institute).unwrap_or_default());
        let program = program_label(state.get(Facet::Program).unwrap_or_default());

        Ok(Self {
            key,
            display_name: format!("{} - {}", institute, program),
            short_name: program.to_string(),
            selection: state.clone(),
            series,
        })
    }

    /// Turns the candidate into a registry entry with its palette slot.
    pub fn into_entry(self, color_index: usize) -> ComparisonEntry {
        ComparisonEntry {
            key: self.key,
            display_name: self.display_name,
            short_name: self.short_name,
            selection: self.selection,
            series: self.series,
            color_index,
        }
    }
}

/// A pinned selection held by the comparison registry.
///
/// `display_name` and `short_name` are presentation conveniences; identity
/// is always `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub key: ComparisonKey,
    pub display_name: String,
    pub short_name: String,
    pub selection: FilterState,
    pub series: RoundSeries,
    pub color_index: usize,
}
