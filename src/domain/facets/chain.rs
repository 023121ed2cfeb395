//! FacetChain - Centralized ordering logic for the filterable facets.
//!
//! Facets form a dependency chain: the options valid for a facet depend on
//! every selection made before it. All ordering questions (what comes next,
//! what is upstream, what must reset) are answered here from chain position
//! alone, so extending the chain needs no change anywhere else.
//!
//! # Facet Order
//!
//! 1. CollegeType → 2. Institute → 3. Program → 4. Quota → 5. Category →
//! 6. Gender
//!
//! # Usage
//!
//! ```ignore
//! use crate::domain::facets::FacetChain;
//! use crate::domain::foundation::Facet;
//!
//! let next = FacetChain::next(Facet::Institute); // Some(Program)
//! let upstream = FacetChain::upstream_of(Facet::Quota); // [CollegeType, Institute, Program]
//! let reset = FacetChain::downstream_of(Facet::Category); // [Gender]
//! ```

use crate::domain::foundation::Facet;

/// Central location for facet ordering logic.
pub struct FacetChain;

impl FacetChain {
    /// The canonical facet order.
    pub const ORDER: [Facet; 6] = [
        Facet::CollegeType,
        Facet::Institute,
        Facet::Program,
        Facet::Quota,
        Facet::Category,
        Facet::Gender,
    ];

    /// Returns all facets in order.
    pub fn all() -> &'static [Facet; 6] {
        &Self::ORDER
    }

    /// Returns the 0-based position of a facet in the chain.
    ///
    /// # Panics
    ///
    /// Never panics: every Facet variant is in ORDER.
    #[inline]
    pub fn position(facet: Facet) -> usize {
        Self::ORDER
            .iter()
            .position(|&f| f == facet)
            .expect("All Facet variants must be in ORDER")
    }

    /// Returns the next facet in the chain, or None at the end.
    pub fn next(facet: Facet) -> Option<Facet> {
        Self::ORDER.get(Self::position(facet) + 1).copied()
    }

    /// Returns the previous facet in the chain, or None at the start.
    pub fn previous(facet: Facet) -> Option<Facet> {
        Self::position(facet)
            .checked_sub(1)
            .and_then(|idx| Self::ORDER.get(idx).copied())
    }

    /// Returns true if facet `a` comes strictly before facet `b`.
    pub fn is_before(a: Facet, b: Facet) -> bool {
        Self::position(a) < Self::position(b)
    }

    /// Returns the facets strictly before `facet`.
    ///
    /// These are the only facets whose selections constrain the options of
    /// `facet`.
    pub fn upstream_of(facet: Facet) -> &'static [Facet] {
        let all: &'static [Facet; 6] = Self::all();
        &all[..Self::position(facet)]
    }

    /// Returns the facets strictly after `facet`.
    ///
    /// These are reset whenever `facet` is selected or cleared.
    pub fn downstream_of(facet: Facet) -> &'static [Facet] {
        let all: &'static [Facet; 6] = Self::all();
        &all[Self::position(facet) + 1..]
    }

    /// Returns the first facet in the chain.
    pub fn first() -> Facet {
        Self::ORDER[0]
    }

    /// Returns the last facet in the chain.
    pub fn last() -> Facet {
        Self::ORDER[Self::ORDER.len() - 1]
    }
}
