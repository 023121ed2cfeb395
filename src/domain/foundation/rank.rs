//! Rank value object (positive integer).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An opening or closing rank. Always at least 1.
///
/// A rank of zero carries no information in a cutoff table, so it cannot be
/// constructed; missing ranks are modeled as `Option<Rank>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rank(u32);

impl Rank {
    /// Creates a Rank, returning error if zero.
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range(
                "rank",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u32.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Rank {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Rank> for u32 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
