//! Randomized benchmark workload over the indexed min-heap.
//!
//! For every requested heap size, the workload builds a heap from random
//! keys (charging construction to a build-phase tracker), then drives it
//! through a seeded mixture of decrease-key, extract-min, and insert
//! operations timed by a separate operations tracker. The build tracker
//! is folded into the operations tracker afterwards, so a single result
//! row carries total cost while build time stays separately readable.
//!
//! A single PRNG seeded once drives all sizes, so a `(seed, sizes, ops,
//! dec_ratio)` tuple fully determines every structural outcome.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::indexed_binary::IndexedMinHeap;
use crate::metrics::PerfTracker;

/// CSV header matching [`BenchRow::to_csv`] field order.
pub const CSV_HEADER: &str =
    "seed,n,build_ns,ops,op_ns,comparisons,array_accesses,swaps,mem_bytes,extracts,decreases,inserts";

/// Parameters of one benchmark run.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Heap sizes to benchmark, one result row each.
    pub sizes: Vec<usize>,
    /// PRNG seed shared by all sizes.
    pub seed: u64,
    /// Operations per size.
    pub ops: usize,
    /// Fraction of operations that attempt a decrease-key.
    pub dec_ratio: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1_000, 10_000],
            seed: 42,
            ops: 10_000,
            dec_ratio: 0.5,
        }
    }
}

/// One result row: merged tracker totals plus per-operation tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRow {
    pub seed: u64,
    pub n: usize,
    pub build_ns: u64,
    pub ops: usize,
    pub op_ns: u64,
    pub comparisons: u64,
    pub array_accesses: u64,
    pub swaps: u64,
    pub mem_bytes: u64,
    pub extracts: u64,
    pub decreases: u64,
    pub inserts: u64,
}

impl BenchRow {
    /// Serializes the row in [`CSV_HEADER`] order, all integer fields.
    #[must_use]
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            self.seed,
            self.n,
            self.build_ns,
            self.ops,
            self.op_ns,
            self.comparisons,
            self.array_accesses,
            self.swaps,
            self.mem_bytes,
            self.extracts,
            self.decreases,
            self.inserts,
        )
    }
}

/// Runs the full workload, one row per configured size.
#[must_use]
pub fn run(config: &WorkloadConfig) -> Vec<BenchRow> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    config
        .sizes
        .iter()
        .map(|&n| run_size(&mut rng, config, n))
        .collect()
}

fn run_size(rng: &mut SmallRng, config: &WorkloadConfig, n: usize) -> BenchRow {
    let initial: Vec<i64> = (0..n).map(|_| rng.random()).collect();
    let mut heap = IndexedMinHeap::heapify(&initial, PerfTracker::new());
    let build_ns = heap.tracker().elapsed_ns();

    // Every id ever issued, live or not; stale picks are expected and the
    // failed decrease-key is simply not counted.
    let mut ids: Vec<usize> = (0..n).collect();

    let mut extracts = 0u64;
    let mut decreases = 0u64;
    let mut inserts = 0u64;

    let mut ops_tracker = PerfTracker::new();
    ops_tracker.start();

    for _ in 0..config.ops {
        let u: f64 = rng.random();

        if u < config.dec_ratio && !heap.is_empty() {
            let id = ids[rng.random_range(0..ids.len())];
            let new_key = rng.random_range(0..100);
            if heap.decrease_key(id, new_key).is_ok() {
                decreases += 1;
            }
        } else if rng.random::<bool>() && !heap.is_empty() {
            if heap.extract_min().is_ok() {
                extracts += 1;
            }
        } else {
            let id = heap.insert(rng.random());
            ids.push(id);
            inserts += 1;
        }
    }

    ops_tracker.stop();
    ops_tracker.add(heap.tracker());

    BenchRow {
        seed: config.seed,
        n,
        build_ns,
        ops: config.ops,
        op_ns: ops_tracker.elapsed_ns(),
        comparisons: ops_tracker.comparisons(),
        array_accesses: ops_tracker.array_accesses(),
        swaps: ops_tracker.swaps(),
        mem_bytes: ops_tracker.mem_bytes(),
        extracts,
        decreases,
        inserts,
    }
}
