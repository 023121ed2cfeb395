//! Facet enum representing the six filterable dimensions of a cutoff record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A filterable dimension of a cutoff record.
///
/// Variants are declared in dependency order; the authoritative ordering
/// lives in [`FacetChain`](crate::domain::facets::FacetChain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    CollegeType,
    Institute,
    Program,
    Quota,
    Category,
    Gender,
}

impl Facet {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Facet::CollegeType => "College Type",
            Facet::Institute => "Institute",
            Facet::Program => "Program",
            Facet::Quota => "Quota",
            Facet::Category => "Category",
            Facet::Gender => "Gender",
        }
    }

    /// Returns the column header used by the published cutoff table.
    pub fn column_name(&self) -> &'static str {
        match self {
            Facet::CollegeType => "College Type",
            Facet::Institute => "Institute",
            Facet::Program => "Academic Program Name",
            Facet::Quota => "Quota",
            Facet::Category => "Category",
            Facet::Gender => "Gender",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
