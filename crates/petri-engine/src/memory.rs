//! Bounded memory of past grid snapshots.
//!
//! [`SnapshotMemory`] retains the most recent generations newest-first.
//! It serves two consumers: the steady-state detector, which searches it
//! for a snapshot structurally equal to the generation just computed,
//! and the ghost-trail renderer, which reads the last few snapshots by
//! index.

use petri_core::CellGrid;
use std::collections::VecDeque;

/// A fixed-capacity, newest-first store of grid snapshots.
pub struct SnapshotMemory {
    store: VecDeque<CellGrid>,
    capacity: usize,
}

impl SnapshotMemory {
    /// Create an empty memory with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 — config validation rejects that
    /// before a memory is ever built.
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity >= 1,
            "SnapshotMemory capacity must be >= 1, got {capacity}"
        );
        Self {
            store: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a snapshot at the front.
    ///
    /// If the memory is at capacity the oldest snapshot is evicted and
    /// returned, so the store never exceeds its configured size.
    pub fn record(&mut self, snapshot: CellGrid) -> Option<CellGrid> {
        let evicted = if self.store.len() == self.capacity {
            self.store.pop_back()
        } else {
            None
        };
        self.store.push_front(snapshot);
        evicted
    }

    /// Index of the first stored snapshot structurally equal to `grid`,
    /// or `None` if nothing matches.
    ///
    /// Index 0 is the most recently recorded snapshot; equality is full
    /// cell-by-cell matrix equality over identical dimensions.
    pub fn find(&self, grid: &CellGrid) -> Option<usize> {
        self.store.iter().position(|stored| stored == grid)
    }

    /// The snapshot recorded `index` insertions ago (0 = most recent).
    pub fn get(&self, index: usize) -> Option<&CellGrid> {
        self.store.get(index)
    }

    /// Number of snapshots currently stored (up to capacity).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the memory is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every stored snapshot, keeping the capacity.
    pub fn clear(&mut self) {
        self.store.clear();
    }
}
