//! Indexed binary min-heap
//!
//! A binary min-heap addressed by stable external ids, so that
//! `decrease_key` can find an element in O(1) no matter how many swaps
//! have relocated it since insertion. Every structural mutation reports
//! its cost (comparisons, key-array accesses, swaps, memory footprint)
//! to the [`PerfTracker`] injected at construction time.
//!
//! Ids are issued monotonically and never reused: `heapify` over an
//! n-element slice assigns `0..n-1` in input order, and later inserts
//! continue upward from `n`. An id stays valid until the element is
//! extracted.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `heapify`      | O(n)       |
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `len`          | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_minheap::{IndexedMinHeap, PerfTracker};
//!
//! let mut heap = IndexedMinHeap::heapify(&[5, 3, 8, 1], PerfTracker::new());
//! assert_eq!(heap.extract_min(), Ok((3, 1)));
//! assert_eq!(heap.extract_min(), Ok((1, 3)));
//!
//! let id = heap.insert(7);
//! heap.decrease_key(id, 2).unwrap();
//! assert_eq!(heap.extract_min(), Ok((id, 2)));
//! ```

use std::mem;

use crate::error::HeapError;
use crate::metrics::PerfTracker;

/// Sentinel position for ids that are not currently live.
const UNSET: usize = usize::MAX;

/// A binary min-heap with O(1) id-to-position lookup for `decrease_key`.
///
/// Three parallel arrays back the heap: `keys` holds priorities in heap
/// order, `id_at` maps a heap position to the id living there, and
/// `pos_of_id` maps an id to its current heap position (or [`UNSET`] once
/// extracted). The two maps are updated together on every swap, so they
/// stay exact inverses over live ids.
#[derive(Debug)]
pub struct IndexedMinHeap {
    /// Priorities in heap order; index = heap position.
    keys: Vec<i64>,
    /// id -> current heap position, `UNSET` for dead ids. Indexed by id;
    /// grows by one for every id ever issued and never shrinks.
    pos_of_id: Vec<usize>,
    /// heap position -> id; parallel to `keys`.
    id_at: Vec<usize>,
    /// Next id to issue. Equal to `pos_of_id.len()`.
    next_id: usize,
    tracker: PerfTracker,
}

impl IndexedMinHeap {
    /// Creates an empty heap that reports costs to `tracker`.
    #[must_use]
    pub fn new(tracker: PerfTracker) -> Self {
        Self {
            keys: Vec::new(),
            pos_of_id: Vec::new(),
            id_at: Vec::new(),
            next_id: 0,
            tracker,
        }
    }

    /// Builds a heap from `initial` in O(n) with bottom-up sift-down
    /// construction, assigning ids `0..initial.len()` in input order.
    ///
    /// The tracker is started before and stopped after construction, so
    /// its elapsed time immediately after `heapify` is the build time.
    /// Every comparison, swap, and key-array access performed during
    /// construction is recorded.
    #[must_use]
    pub fn heapify(initial: &[i64], mut tracker: PerfTracker) -> Self {
        tracker.start();
        let n = initial.len();
        let mut heap = Self {
            keys: Vec::with_capacity(n),
            pos_of_id: Vec::with_capacity(n),
            id_at: Vec::with_capacity(n),
            next_id: n,
            tracker,
        };

        for (pos, &key) in initial.iter().enumerate() {
            heap.keys.push(key);
            heap.pos_of_id.push(pos);
            heap.id_at.push(pos);
            heap.tracker.record_array_accesses(1);
        }

        // Sift down each internal node, last parent first.
        if n > 1 {
            for pos in (0..=(n - 2) / 2).rev() {
                heap.sift_down(pos);
            }
        }

        heap.refresh_mem_estimate();
        heap.tracker.stop();
        heap
    }

    /// Number of live elements. Untracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if no elements are live. Untracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The tracker this heap reports costs to.
    ///
    /// After `heapify` its elapsed time is the build time; once an
    /// operations phase finishes, fold it into the phase tracker with
    /// [`PerfTracker::add`].
    #[must_use]
    pub fn tracker(&self) -> &PerfTracker {
        &self.tracker
    }

    /// Inserts `key`, returning the freshly issued id. Always succeeds.
    ///
    /// The element is appended at the end of the backing storage and
    /// sifted up until its parent's key is no larger.
    pub fn insert(&mut self, key: i64) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        let pos = self.keys.len();
        self.keys.push(key);
        self.id_at.push(id);
        self.pos_of_id.push(pos);
        self.tracker.record_array_accesses(1);

        self.sift_up(pos);
        self.refresh_mem_estimate();
        id
    }

    /// Removes and returns the minimum element as `(id, key)`.
    ///
    /// The last element moves into the root position and sifts down,
    /// swapping with its smaller child (left on ties) until heap order is
    /// restored. The extracted id is invalidated permanently.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn extract_min(&mut self) -> Result<(usize, i64), HeapError> {
        if self.keys.is_empty() {
            return Err(HeapError::Empty);
        }

        let min_id = self.id_at[0];
        let min_key = self.keys[0];
        self.tracker.record_array_accesses(1);
        self.pos_of_id[min_id] = UNSET;

        let last = self.keys.len() - 1;
        if last > 0 {
            let moved_key = self.keys[last];
            let moved_id = self.id_at[last];
            self.tracker.record_array_accesses(1);
            self.keys[0] = moved_key;
            self.id_at[0] = moved_id;
            self.pos_of_id[moved_id] = 0;
            self.tracker.record_array_accesses(1);
        }
        self.keys.truncate(last);
        self.id_at.truncate(last);

        if last > 1 {
            self.sift_down(0);
        }

        self.refresh_mem_estimate();
        Ok((min_id, min_key))
    }

    /// Lowers the key of the live element `id` to `new_key` and sifts it
    /// up (decrease-key only ever moves an element toward the root).
    ///
    /// A failed call leaves the heap unchanged.
    ///
    /// # Errors
    ///
    /// - [`HeapError::InvalidId`] if `id` was never issued or is already
    ///   extracted.
    /// - [`HeapError::PriorityNotDecreased`] if `new_key` is not strictly
    ///   less than the element's current key.
    pub fn decrease_key(&mut self, id: usize, new_key: i64) -> Result<(), HeapError> {
        let pos = match self.pos_of_id.get(id) {
            Some(&pos) if pos != UNSET => pos,
            _ => return Err(HeapError::InvalidId),
        };

        self.tracker.record_comparison();
        self.tracker.record_array_accesses(1);
        if new_key >= self.keys[pos] {
            return Err(HeapError::PriorityNotDecreased);
        }

        self.keys[pos] = new_key;
        self.tracker.record_array_accesses(1);
        self.sift_up(pos);
        Ok(())
    }

    /// The documented memory-footprint formula: live elements times the
    /// per-element width of the three parallel arrays (key plus the two
    /// id/position map entries). An estimate, not an allocator value.
    #[must_use]
    pub fn mem_estimate(len: usize) -> u64 {
        (len * (mem::size_of::<i64>() + 2 * mem::size_of::<usize>())) as u64
    }

    /// Checks the heap-order and id-bijection invariants. For tests.
    #[must_use]
    pub fn verify_internal_structure(&self) -> bool {
        let len = self.keys.len();
        if self.id_at.len() != len || self.pos_of_id.len() != self.next_id {
            return false;
        }

        for pos in 1..len {
            if self.keys[(pos - 1) / 2] > self.keys[pos] {
                return false;
            }
        }

        // pos_of_id and id_at must be exact inverses over live ids.
        for pos in 0..len {
            let id = self.id_at[pos];
            if self.pos_of_id.get(id) != Some(&pos) {
                return false;
            }
        }
        let live = self.pos_of_id.iter().filter(|&&pos| pos != UNSET).count();
        live == len
    }

    /// Compares the keys at two positions, charging one comparison and
    /// two key reads. True if the key at `a` is strictly smaller.
    fn keys_less(&mut self, a: usize, b: usize) -> bool {
        self.tracker.record_comparison();
        self.tracker.record_array_accesses(2);
        self.keys[a] < self.keys[b]
    }

    /// Swaps two positions and repairs both id maps, charging one swap
    /// and four key accesses (two reads, two writes).
    fn swap_positions(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
        self.id_at.swap(a, b);
        self.pos_of_id[self.id_at[a]] = a;
        self.pos_of_id[self.id_at[b]] = b;
        self.tracker.record_swap();
        self.tracker.record_array_accesses(4);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.keys_less(pos, parent) {
                self.swap_positions(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.keys.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            // The right child wins only with a strictly smaller key, so
            // equal children resolve to the left child.
            let right = left + 1;
            let mut child = left;
            if right < len && self.keys_less(right, left) {
                child = right;
            }

            if self.keys_less(child, pos) {
                self.swap_positions(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }

    fn refresh_mem_estimate(&mut self) {
        let bytes = Self::mem_estimate(self.keys.len());
        self.tracker.set_mem_bytes(bytes);
    }
}
