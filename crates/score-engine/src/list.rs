//! Ranked List
//!
//! The session's working sequence. Order is the rank order (highest
//! desirability first) and is only changed by a wholesale replace or an
//! explicit move; field edits never reorder.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};
use super::entry::Entry;

/// Ordered sequence of entries with controlled mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedList {
    entries: Vec<Entry>,
}

impl RankedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Discard current contents and install the given sequence as-is.
    /// Used after a fetch and after an interpolation pass.
    pub fn replace_all(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    /// Apply a field-level mutation to the entry with the given id,
    /// in place. The entry keeps its position.
    pub fn update<F>(&mut self, id: u32, mutator: F) -> DomainResult<()>
    where
        F: FnOnce(&mut Entry),
    {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("entry {}", id)))?;
        mutator(entry);
        Ok(())
    }

    /// Remove the entry at `from` and reinsert it at `to`, shifting the
    /// entries in between. All other entries keep their relative order.
    pub fn move_entry(&mut self, from: usize, to: usize) -> DomainResult<()> {
        let len = self.entries.len();
        if from >= len || to >= len {
            return Err(DomainError::NotFound(format!(
                "position {} -> {} in a list of {}",
                from, to, len
            )));
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// Read-only view of the current sequence
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Current position of an entry, by id
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
