//! CutoffRecord - The canonical, normalized row of the cutoff table.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{Facet, Rank, ValidationError};

/// One institute/program/quota/category/gender/round combination.
///
/// Facet fields are `None` when the source cell was empty or unusable. An
/// absent facet never matches a selection and never appears as an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutoffRecord {
    pub college_type: Option<String>,
    pub institute: Option<String>,
    pub program: Option<String>,
    pub quota: Option<String>,
    pub category: Option<String>,
    pub gender: Option<String>,
    /// Counseling round, always at least 1.
    #[serde(deserialize_with = "deserialize_round")]
    pub round: u32,
    pub opening_rank: Option<Rank>,
    pub closing_rank: Option<Rank>,
}

impl CutoffRecord {
    /// Creates a record for a round with every facet and rank absent.
    ///
    /// `round` must be at least 1; use [`CutoffRecord::try_new`] for
    /// unchecked input.
    pub fn new(round: u32) -> Self {
        debug_assert!(round >= 1, "cutoff round must be at least 1");
        Self {
            college_type: None,
            institute: None,
            program: None,
            quota: None,
            category: None,
            gender: None,
            round,
            opening_rank: None,
            closing_rank: None,
        }
    }

    /// Creates a record for a round, rejecting round 0.
    pub fn try_new(round: u32) -> Result<Self, ValidationError> {
        validate_round(round)?;
        Ok(Self::new(round))
    }

    /// Sets a facet value. Blank values are stored as absent.
    pub fn with_facet(mut self, facet: Facet, value: impl Into<String>) -> Self {
        let value = value.into();
        let value = if value.trim().is_empty() { None } else { Some(value) };
        *self.facet_slot(facet) = value;
        self
    }

    /// Sets both ranks. Zero values are stored as absent.
    pub fn with_ranks(mut self, opening: Option<u32>, closing: Option<u32>) -> Self {
        self.opening_rank = opening.and_then(|v| Rank::try_new(v).ok());
        self.closing_rank = closing.and_then(|v| Rank::try_new(v).ok());
        self
    }

    /// Returns the value held for a facet, if present.
    pub fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::CollegeType => self.college_type.as_deref(),
            Facet::Institute => self.institute.as_deref(),
            Facet::Program => self.program.as_deref(),
            Facet::Quota => self.quota.as_deref(),
            Facet::Category => self.category.as_deref(),
            Facet::Gender => self.gender.as_deref(),
        }
    }

    /// Returns true if the facet is present and equal to `value`.
    pub fn matches(&self, facet: Facet, value: &str) -> bool {
        self.facet(facet) == Some(value)
    }

    fn facet_slot(&mut self, facet: Facet) -> &mut Option<String> {
        match facet {
            Facet::CollegeType => &mut self.college_type,
            Facet::Institute => &mut self.institute,
            Facet::Program => &mut self.program,
            Facet::Quota => &mut self.quota,
            Facet::Category => &mut self.category,
            Facet::Gender => &mut self.gender,
        }
    }
}

fn validate_round(round: u32) -> Result<u32, ValidationError> {
    if round == 0 {
        return Err(ValidationError::out_of_range(
            "round",
            1,
            i64::from(u32::MAX),
            0,
        ));
    }
    Ok(round)
}

fn deserialize_round<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let round = u32::deserialize(deserializer)?;
    validate_round(round).map_err(serde::de::Error::custom)
}
