//! Rejection reasons for registry mutations.

use thiserror::Error;

use super::ComparisonKey;
use crate::domain::foundation::Facet;

/// Why an entry was not added. The registry is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonRejected {
    #[error("Selection is incomplete: {missing} not chosen")]
    IncompleteSelection { missing: Facet },

    #[error("Selection is already being compared: {key}")]
    DuplicateEntry { key: ComparisonKey },

    #[error("Selection has {found} round(s) of data, at least {required} needed")]
    InsufficientRounds { found: usize, required: usize },
}
