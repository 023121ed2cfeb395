//! ComparisonRegistry - The set of selections pinned side by side.

use tracing::debug;

use super::{ComparisonCandidate, ComparisonEntry, ComparisonKey, ComparisonRejected};
use crate::domain::cutoff::CutoffRecord;
use crate::domain::facets::FilterState;

/// Number of palette slots when none is configured.
pub const DEFAULT_PALETTE_SIZE: usize = 8;

/// Ordered, key-unique collection of comparison entries.
///
/// Mutations are all-or-nothing: a rejected `add` leaves the registry
/// exactly as it was. Whether comparison mode is active is derived from the
/// entry count and never stored.
#[derive(Debug, Clone)]
pub struct ComparisonRegistry {
    entries: Vec<ComparisonEntry>,
    palette_size: usize,
}

impl ComparisonRegistry {
    /// Creates an empty registry cycling through `palette_size` colors.
    ///
    /// A palette size of zero is treated as one.
    pub fn new(palette_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            palette_size: palette_size.max(1),
        }
    }

    /// Validates a selection and pins it.
    ///
    /// # Errors
    ///
    /// Returns `ComparisonRejected` when the selection is incomplete, already
    /// pinned, or has fewer than two rounds of data.
    pub fn add(
        &mut self,
        records: &[CutoffRecord],
        state: &FilterState,
    ) -> Result<ComparisonEntry, ComparisonRejected> {
        if let Some(key) = ComparisonKey::from_state(state) {
            self.ensure_absent(&key)?;
        }
        let candidate = ComparisonCandidate::prepare(records, state)?;
        self.insert(candidate)
    }

    /// Pins an already prepared candidate.
    ///
    /// The color index is the registry size at insertion, modulo the palette.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` if the key is already pinned.
    pub fn insert(
        &mut self,
        candidate: ComparisonCandidate,
    ) -> Result<ComparisonEntry, ComparisonRejected> {
        self.ensure_absent(&candidate.key)?;

        let color_index = self.entries.len() % self.palette_size;
        let entry = candidate.into_entry(color_index);
        self.entries.push(entry.clone());

        debug!(key = %entry.key, color_index, size = self.entries.len(), "Comparison entry added");
        Ok(entry)
    }

    /// Removes the entry with `key`, if present.
    pub fn remove(&mut self, key: &ComparisonKey) -> Option<ComparisonEntry> {
        let idx = self.entries.iter().position(|e| &e.key == key)?;
        let removed = self.entries.remove(idx);
        debug!(key = %key, size = self.entries.len(), "Comparison entry removed");
        Some(removed)
    }

    /// Removes every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn get(&self, key: &ComparisonKey) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| &e.key == key)
    }

    pub fn contains(&self, key: &ComparisonKey) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True while at least one entry is pinned.
    pub fn is_active(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    fn ensure_absent(&self, key: &ComparisonKey) -> Result<(), ComparisonRejected> {
        if self.contains(key) {
            return Err(ComparisonRejected::DuplicateEntry { key: key.clone() });
        }
        Ok(())
    }
}

impl Default for ComparisonRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE_SIZE)
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
