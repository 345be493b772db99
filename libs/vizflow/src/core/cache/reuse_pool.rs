// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use std::sync::Arc;

/// Pool of shared entries. An entry is unused when the pool holds its only
/// strong reference.
#[derive(Debug)]
pub struct ReusePool<T> {
    entries: Vec<Arc<T>>,
}

impl<T> ReusePool<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// First entry nobody outside the pool holds.
    pub fn find_unused(&mut self) -> Option<&mut Arc<T>> {
        self.entries
            .iter_mut()
            .find(|entry| Arc::strong_count(entry) == 1)
    }

    /// Hand out an unused entry, or pool a freshly created one.
    pub fn acquire_or_insert_with(&mut self, create: impl FnOnce() -> T) -> Arc<T> {
        if let Some(entry) = self.find_unused() {
            return Arc::clone(entry);
        }
        let entry = Arc::new(create());
        self.entries.push(Arc::clone(&entry));
        entry
    }

    pub fn push(&mut self, entry: Arc<T>) {
        if !self.entries.iter().any(|e| Arc::ptr_eq(e, &entry)) {
            self.entries.push(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries currently held outside the pool.
    pub fn in_use(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| Arc::strong_count(entry) > 1)
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for ReusePool<T> {
    fn default() -> Self {
        Self::new()
    }
}
