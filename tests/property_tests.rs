//! Property-based tests using proptest
//!
//! Random operation sequences are replayed against a plain reference
//! model (a vector of live `(id, key)` pairs) while the structural
//! invariants are checked after every single operation.

use proptest::prelude::*;

use indexed_minheap::{HeapError, IndexedMinHeap, PerfTracker};

/// One generated workload step: selector plus raw operands.
type RawOp = (u8, i64, usize);

/// Replays `ops` on the heap and the reference model in lockstep,
/// verifying heap order, the id bijection, and minimum agreement.
fn check_operation_sequence(initial: Vec<i64>, ops: Vec<RawOp>) -> Result<(), TestCaseError> {
    let n = initial.len();
    let mut heap = IndexedMinHeap::heapify(&initial, PerfTracker::new());
    prop_assert!(heap.verify_internal_structure());

    // Reference model: every live element as (id, key).
    let mut live: Vec<(usize, i64)> = initial.iter().copied().enumerate().collect();
    let mut issued: Vec<usize> = (0..n).collect();

    for (selector, key, pick) in ops {
        match selector % 3 {
            0 => {
                let id = heap.insert(key);
                prop_assert_eq!(id, issued.len());
                issued.push(id);
                live.push((id, key));
            }
            1 => {
                if live.is_empty() {
                    prop_assert_eq!(heap.extract_min(), Err(HeapError::Empty));
                } else {
                    let (id, extracted) = heap.extract_min().unwrap();
                    let min_key = live.iter().map(|&(_, k)| k).min().unwrap();
                    prop_assert_eq!(extracted, min_key);
                    let pos = live
                        .iter()
                        .position(|&(live_id, k)| live_id == id && k == extracted);
                    prop_assert!(pos.is_some(), "extracted id {} not live", id);
                    live.swap_remove(pos.unwrap());
                }
            }
            _ => {
                if issued.is_empty() {
                    prop_assert_eq!(heap.decrease_key(pick, key), Err(HeapError::InvalidId));
                } else {
                    let id = issued[pick % issued.len()];
                    let current = live.iter().find(|&&(live_id, _)| live_id == id);
                    let outcome = heap.decrease_key(id, key);
                    match current {
                        None => prop_assert_eq!(outcome, Err(HeapError::InvalidId)),
                        Some(&(_, current_key)) if key >= current_key => {
                            prop_assert_eq!(outcome, Err(HeapError::PriorityNotDecreased));
                        }
                        Some(&(live_id, _)) => {
                            prop_assert_eq!(outcome, Ok(()));
                            if let Some(entry) =
                                live.iter_mut().find(|entry| entry.0 == live_id)
                            {
                                entry.1 = key;
                            }
                        }
                    }
                }
            }
        }

        prop_assert!(heap.verify_internal_structure());
        prop_assert_eq!(heap.len(), live.len());
    }

    Ok(())
}

/// Counters must never decrease, and the memory estimate must track the
/// live size exactly.
fn check_tracker_accounting(initial: Vec<i64>, ops: Vec<RawOp>) -> Result<(), TestCaseError> {
    let mut heap = IndexedMinHeap::heapify(&initial, PerfTracker::new());
    let mut last = (0u64, 0u64, 0u64);

    for (selector, key, pick) in ops {
        match selector % 3 {
            0 => {
                heap.insert(key);
            }
            1 => {
                let _ = heap.extract_min();
            }
            _ => {
                let _ = heap.decrease_key(pick, key);
            }
        }

        let now = (
            heap.tracker().comparisons(),
            heap.tracker().array_accesses(),
            heap.tracker().swaps(),
        );
        prop_assert!(now.0 >= last.0);
        prop_assert!(now.1 >= last.1);
        prop_assert!(now.2 >= last.2);
        last = now;

        prop_assert_eq!(
            heap.tracker().mem_bytes(),
            IndexedMinHeap::mem_estimate(heap.len())
        );
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_operation_sequences_maintain_invariants(
        initial in prop::collection::vec(-1000i64..1000, 0..40),
        ops in prop::collection::vec((0u8..3, -1000i64..1000, 0usize..64), 0..200)
    ) {
        check_operation_sequence(initial, ops)?;
    }

    #[test]
    fn test_tracker_accounting(
        initial in prop::collection::vec(-1000i64..1000, 0..40),
        ops in prop::collection::vec((0u8..3, -1000i64..1000, 0usize..64), 0..200)
    ) {
        check_tracker_accounting(initial, ops)?;
    }

    #[test]
    fn test_heapify_ids_and_drain_order(
        keys in prop::collection::vec(-10_000i64..10_000, 0..200)
    ) {
        let mut heap = IndexedMinHeap::heapify(&keys, PerfTracker::new());
        prop_assert!(heap.verify_internal_structure());
        prop_assert_eq!(heap.len(), keys.len());

        let mut seen_ids = Vec::with_capacity(keys.len());
        let mut previous = i64::MIN;
        while let Ok((id, key)) = heap.extract_min() {
            prop_assert!(key >= previous);
            // Every id must carry the key it was issued for.
            prop_assert_eq!(key, keys[id]);
            previous = key;
            seen_ids.push(id);
        }

        seen_ids.sort_unstable();
        let expected: Vec<usize> = (0..keys.len()).collect();
        prop_assert_eq!(seen_ids, expected);
    }

    #[test]
    fn test_tracker_merge_totals_commute(
        a_keys in prop::collection::vec(-100i64..100, 1..30),
        b_keys in prop::collection::vec(-100i64..100, 1..30)
    ) {
        let a = IndexedMinHeap::heapify(&a_keys, PerfTracker::new());
        let b = IndexedMinHeap::heapify(&b_keys, PerfTracker::new());

        let mut ab = PerfTracker::new();
        ab.add(a.tracker());
        ab.add(b.tracker());

        let mut ba = PerfTracker::new();
        ba.add(b.tracker());
        ba.add(a.tracker());

        prop_assert_eq!(ab.comparisons(), ba.comparisons());
        prop_assert_eq!(ab.array_accesses(), ba.array_accesses());
        prop_assert_eq!(ab.swaps(), ba.swaps());
        prop_assert_eq!(ab.elapsed_ns(), ba.elapsed_ns());

        // The sums match the operand totals exactly.
        prop_assert_eq!(
            ab.comparisons(),
            a.tracker().comparisons() + b.tracker().comparisons()
        );
        prop_assert_eq!(
            ab.elapsed_ns(),
            a.tracker().elapsed_ns() + b.tracker().elapsed_ns()
        );
    }
}
