//! Per-element locks.

use std::collections::HashSet;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Exclusive locks keyed by element name.
///
/// The table only holds the names that are locked right now; a name is
/// removed when its guard drops. Updates of different elements only share
/// the table lookup.
#[derive(Debug, Default)]
pub struct ElementLocks {
    held: Mutex<HashSet<String>>,
    released: Condvar,
}

impl ElementLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the named element is locked by the caller.
    pub fn lock(&self, name: &str) -> ElementGuard<'_> {
        let mut held = self.table();
        while held.contains(name) {
            held = self
                .released
                .wait(held)
                .unwrap_or_else(PoisonError::into_inner);
        }
        held.insert(name.to_string());

        ElementGuard {
            locks: self,
            name: name.to_string(),
        }
    }

    /// Number of elements locked right now.
    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The set is consistent whenever the mutex is released, so a poisoned
    // table is taken over.
    fn table(&self) -> MutexGuard<'_, HashSet<String>> {
        self.held.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds one element lock; dropping it releases the lock, also on unwind.
#[derive(Debug)]
pub struct ElementGuard<'a> {
    locks: &'a ElementLocks,
    name: String,
}

impl Drop for ElementGuard<'_> {
    fn drop(&mut self) {
        self.locks.table().remove(&self.name);
        self.locks.released.notify_all();
    }
}
