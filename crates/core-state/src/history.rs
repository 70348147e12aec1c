//! Bounded log of accepted inputs.

use std::collections::VecDeque;
use tracing::debug;

/// Default capacity for a new store.
pub const HISTORY_DEFAULT_MAX: usize = 100;

/// Ordered log of accepted lines, oldest first.
///
/// `add` ignores blank text and text equal to the newest entry (adjacent
/// dedup only; older duplicates are kept). Growing past `max_size` evicts
/// from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    items: VecDeque<String>,
    max_size: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(HISTORY_DEFAULT_MAX)
    }
}

impl HistoryStore {
    /// `max_size` below 1 is raised to 1.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: VecDeque::new(),
            max_size: max_size.max(1),
        }
    }

    /// Build a default-capacity store, feeding every entry through [`HistoryStore::add`].
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::default();
        for e in entries {
            store.add(e);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Change the capacity (floor 1), evicting the oldest entries right away
    /// when shrinking below the current count.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size.max(1);
        self.evict();
    }

    /// Returns true when the entry was stored.
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if item.trim().is_empty() {
            return false;
        }
        if self.items.back() == Some(&item) {
            debug!(target: "state.history", len = item.len(), "add_skipped_duplicate");
            return false;
        }
        debug!(target: "state.history", len = item.len(), count = self.items.len() + 1, "add");
        self.items.push_back(item);
        self.evict();
        true
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.items.back().map(String::as_str)
    }

    /// Remove the first entry equal to `item`.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|e| e == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Out-of-range indexes are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        self.items.remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Snapshot of all entries in insertion order.
    pub fn entries(&self) -> Vec<String> {
        self.items.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    fn evict(&mut self) {
        while self.items.len() > self.max_size {
            self.items.pop_front();
            debug!(target: "state.history", max = self.max_size, "evict_oldest");
        }
    }
}
