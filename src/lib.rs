//! Indexed binary min-heap with instrumented cost tracking
//!
//! This crate provides a binary min-heap addressed by stable external ids
//! (so `decrease_key` is O(log n) with O(1) element lookup) together with
//! a performance tracker that accumulates the structural cost of every
//! operation: comparisons, key-array accesses, swaps, a memory-footprint
//! estimate, and phase wall-clock time.
//!
//! # Features
//!
//! - **O(n) heapify** via bottom-up sift-down construction
//! - **O(log n)** insert, extract-min, and decrease-key
//! - **Stable ids**: monotonically issued, never reused, valid until
//!   extraction no matter how many swaps relocate the element
//! - **Mergeable trackers**: build-phase and operations-phase costs stay
//!   separately attributable, then fold into one total for reporting
//! - **Workload runner**: a seeded benchmark driver
//!   (`bin/bench_runner`) emitting one CSV row per tested heap size
//!
//! # Example
//!
//! ```rust
//! use indexed_minheap::{IndexedMinHeap, PerfTracker};
//!
//! let mut heap = IndexedMinHeap::heapify(&[5, 3, 8, 1], PerfTracker::new());
//! let _build_ns = heap.tracker().elapsed_ns();
//!
//! let id = heap.insert(4);
//! heap.decrease_key(id, 2)?;
//! assert_eq!(heap.extract_min()?, (3, 1));
//! assert_eq!(heap.extract_min()?, (id, 2));
//!
//! let mut totals = PerfTracker::new();
//! totals.add(heap.tracker());
//! assert!(totals.comparisons() > 0);
//! # Ok::<(), indexed_minheap::HeapError>(())
//! ```

pub mod error;
pub mod indexed_binary;
pub mod metrics;
pub mod workload;

pub use error::HeapError;
pub use indexed_binary::IndexedMinHeap;
pub use metrics::PerfTracker;
