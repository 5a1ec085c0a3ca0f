//! Indexed min-priority queue over vertex keys (the open list).

use std::collections::HashMap;

use crate::core::GridCoord;
use crate::error::FrontierError;

use super::key::Key;

#[derive(Clone, Copy, Debug)]
struct Entry {
    coord: GridCoord,
    key: Key,
}

/// Array-backed binary min-heap of `(vertex, key)` entries with an
/// auxiliary coordinate-to-slot map.
///
/// The map gives O(1) membership tests and lets `update`/`remove` reach
/// arbitrary entries in O(log n). Invariants between calls:
///
/// - at most one entry per coordinate
/// - the heap array satisfies the min-heap property under [`Key`] ordering
/// - the index map mirrors array positions exactly
#[derive(Clone, Debug, Default)]
pub struct IndexedFrontier {
    heap: Vec<Entry>,
    index: HashMap<GridCoord, usize>,
}

impl IndexedFrontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no vertices are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// O(1) membership test.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.index.contains_key(&coord)
    }

    /// The vertex with the smallest key.
    pub fn top(&self) -> Result<GridCoord, FrontierError> {
        self.heap
            .first()
            .map(|e| e.coord)
            .ok_or(FrontierError::EmptyFrontier)
    }

    /// The smallest key.
    pub fn top_key(&self) -> Result<Key, FrontierError> {
        self.heap
            .first()
            .map(|e| e.key)
            .ok_or(FrontierError::EmptyFrontier)
    }

    /// Queue a vertex. O(log n).
    pub fn insert(&mut self, coord: GridCoord, key: Key) -> Result<(), FrontierError> {
        if self.contains(coord) {
            return Err(FrontierError::DuplicateEntry(coord));
        }
        self.heap.push(Entry { coord, key });
        self.index.insert(coord, self.heap.len() - 1);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Remove an arbitrary queued vertex. O(log n).
    pub fn remove(&mut self, coord: GridCoord) -> Result<(), FrontierError> {
        let slot = *self
            .index
            .get(&coord)
            .ok_or(FrontierError::NotFound(coord))?;

        let last = self.heap.len() - 1;
        self.swap(slot, last);
        self.heap.truncate(last);
        self.index.remove(&coord);

        // The displaced element may need to move either way.
        if slot < self.heap.len() {
            self.sift_up(slot);
            self.sift_down(slot);
        }
        Ok(())
    }

    /// Replace a queued vertex's key. Works for both key decreases and
    /// increases. O(log n).
    pub fn update(&mut self, coord: GridCoord, key: Key) -> Result<(), FrontierError> {
        let slot = *self
            .index
            .get(&coord)
            .ok_or(FrontierError::NotFound(coord))?;

        self.heap[slot].key = key;
        self.sift_up(slot);
        self.sift_down(slot);
        Ok(())
    }

    /// Remove and return the vertex with the smallest key.
    pub fn pop(&mut self) -> Result<GridCoord, FrontierError> {
        let top = self.top()?;
        self.remove(top)?;
        Ok(top)
    }

    /// Clear the heap and the index map.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[parent].key > self.heap[slot].key {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let mut smallest = slot;
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;

            if left < self.heap.len() && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }

            if smallest != slot {
                self.swap(slot, smallest);
                slot = smallest;
            } else {
                break;
            }
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.index.insert(self.heap[i].coord, i);
        self.index.insert(self.heap[j].coord, j);
    }
}
