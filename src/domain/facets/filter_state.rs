//! FilterState - The current selection along the facet chain.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::FacetChain;
use crate::domain::foundation::Facet;

/// A user-driven change to one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum FacetChange {
    Select { facet: Facet, value: String },
    Clear { facet: Facet },
}

impl FacetChange {
    /// Returns the facet this change targets.
    pub fn facet(&self) -> Facet {
        match self {
            FacetChange::Select { facet, .. } | FacetChange::Clear { facet } => *facet,
        }
    }
}

/// Selected value per facet; missing keys are unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    selections: BTreeMap<Facet, String>,
}

impl FilterState {
    /// Creates a state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from explicit selections without applying chain resets.
    ///
    /// Blank values are treated as unselected.
    pub fn from_selections<I, V>(selections: I) -> Self
    where
        I: IntoIterator<Item = (Facet, V)>,
        V: Into<String>,
    {
        let selections = selections
            .into_iter()
            .map(|(facet, value)| (facet, value.into()))
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();
        Self { selections }
    }

    /// Applies a change and resets every facet after it in the chain.
    ///
    /// Facets before the changed one are untouched. Selecting a blank value
    /// behaves like clearing.
    pub fn apply(&self, change: &FacetChange) -> FilterState {
        let target = change.facet();
        let mut next = self.clone();

        for facet in FacetChain::downstream_of(target) {
            next.selections.remove(facet);
        }

        match change {
            FacetChange::Select { value, .. } if !value.trim().is_empty() => {
                next.selections.insert(target, value.clone());
            }
            _ => {
                next.selections.remove(&target);
            }
        }

        next
    }

    /// Selects a value for a facet. See [`FilterState::apply`].
    pub fn select(&self, facet: Facet, value: impl Into<String>) -> FilterState {
        self.apply(&FacetChange::Select {
            facet,
            value: value.into(),
        })
    }

    /// Clears a facet. See [`FilterState::apply`].
    pub fn clear(&self, facet: Facet) -> FilterState {
        self.apply(&FacetChange::Clear { facet })
    }

    /// Returns the selected value for a facet.
    pub fn get(&self, facet: Facet) -> Option<&str> {
        self.selections.get(&facet).map(String::as_str)
    }

    pub fn is_set(&self, facet: Facet) -> bool {
        self.selections.contains_key(&facet)
    }

    /// Returns set selections in chain order.
    pub fn selections(&self) -> impl Iterator<Item = (Facet, &str)> + '_ {
        FacetChain::all()
            .iter()
            .filter_map(move |&facet| self.get(facet).map(|value| (facet, value)))
    }

    /// Returns set selections strictly before `facet` in the chain.
    pub fn upstream_selections(&self, facet: Facet) -> Vec<(Facet, &str)> {
        FacetChain::upstream_of(facet)
            .iter()
            .filter_map(|&f| self.get(f).map(|value| (f, value)))
            .collect()
    }

    /// Returns the first facet in chain order without a selection.
    pub fn first_unselected(&self) -> Option<Facet> {
        FacetChain::all().iter().copied().find(|f| !self.is_set(*f))
    }

    /// True when every facet in the chain holds a value.
    pub fn is_fully_specified(&self) -> bool {
        self.first_unselected().is_none()
    }

    /// Returns every facet value in chain order, if fully specified.
    pub fn chain_values(&self) -> Option<Vec<&str>> {
        FacetChain::all().iter().map(|&f| self.get(f)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
