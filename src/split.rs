// Copyright (c) 2025 The segment-splitter developers
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The greedy equal-sum split scan.
//!
//! Both entry points share the same pipeline: validate input → sum into the
//! wide accumulator → check divisibility by `k` → scan left to right,
//! closing a segment whenever the running sum equals the target exactly.
//! The scan checks equality only; a running sum that overshoots the target
//! is not detected specially, it simply never closes enough segments. The
//! scan stops at the k-th boundary, so trailing elements past it are never
//! examined.
//!
//! # Error policy
//!
//! [`can_partition`] maps invalid input and infeasibility to `false`;
//! [`partition`] reports them as [`SplitError::InvalidInput`] and
//! [`SplitError::Impossible`]. Accumulator overflow is a computational
//! fault, not a feasibility answer, and propagates from both.

use crate::element::Summable;
use crate::partition::{Partition, PartitionBuilder};
use crate::sum::total_sum;
use crate::SplitError;

/// Returns `true` if `seq` can be split into exactly `k` contiguous,
/// non-empty segments of equal sum.
///
/// Invalid input (`k == 0` or a sequence shorter than `k`) and infeasible
/// splits both yield `Ok(false)`.
///
/// # Errors
/// Returns [`SplitError::Overflow`] if summing an integral sequence
/// overflows the wide accumulator.
pub fn can_partition<T: Summable>(seq: &[T], k: usize) -> Result<bool, SplitError> {
    if validate_input(seq.len(), k).is_err() {
        tracing::debug!("invalid input (len {}, k {k}) → not splittable", seq.len());
        return Ok(false);
    }

    let total = total_sum(seq)?;
    if !T::divides_evenly(total, k) {
        tracing::debug!("total {total} not evenly divisible by {k} → not splittable");
        return Ok(false);
    }

    let target = T::segment_target(total, k);
    let boundaries = scan_boundaries(seq, target, k)?;
    Ok(boundaries.len() == k)
}

/// Splits `seq` into exactly `k` contiguous, non-empty segments of equal sum.
///
/// The input is never mutated; segments are owned copies in input order.
/// The scan stops once `k` segments are complete, so a trailing run of
/// elements after the k-th boundary is discarded (the returned
/// [`Partition::consumed`] records how many elements the segments cover).
///
/// # Errors
/// - [`SplitError::InvalidInput`] if `k == 0` or `seq.len() < k`.
/// - [`SplitError::Overflow`] if summing overflows the wide accumulator.
/// - [`SplitError::Impossible`] if the total is not evenly divisible by `k`,
///   or fewer than `k` segments reach the target sum exactly.
pub fn partition<T: Summable>(seq: &[T], k: usize) -> Result<Partition<T>, SplitError> {
    validate_input(seq.len(), k)?;

    let total = total_sum(seq)?;
    if !T::divides_evenly(total, k) {
        return Err(SplitError::Impossible {
            detail: format!("total sum {total} is not evenly divisible by {k}"),
        });
    }

    let target = T::segment_target(total, k);
    let boundaries = scan_boundaries(seq, target, k)?;
    if boundaries.len() < k {
        return Err(SplitError::Impossible {
            detail: format!(
                "only {} of {k} segment(s) reach the target sum {target}",
                boundaries.len(),
            ),
        });
    }

    let mut builder = PartitionBuilder::new(target);
    let mut start = 0;
    for &end in &boundaries {
        builder.push_segment(seq[start..end].to_vec());
        start = end;
    }

    let partition = builder.build();
    partition.validate()?;

    tracing::debug!(
        "split into {k} segment(s) of target {target}, {}/{} element(s) consumed",
        partition.consumed,
        seq.len(),
    );
    Ok(partition)
}

/// Checks the shared preconditions: `k` positive, sequence long enough for
/// `k` non-empty segments.
fn validate_input(len: usize, k: usize) -> Result<(), SplitError> {
    if k == 0 || len < k {
        return Err(SplitError::InvalidInput { len, k });
    }
    Ok(())
}

/// Scans `seq` left to right, returning the exclusive end index of each
/// segment whose running sum hits `target` exactly. Stops after `k`
/// boundaries; may return fewer if the scan never closes enough segments.
///
/// Uses the same checked accumulation as the total sum, so a running sum
/// that leaves an integral accumulator's range reports `Overflow` instead
/// of wrapping.
fn scan_boundaries<T: Summable>(
    seq: &[T],
    target: T::Accum,
    k: usize,
) -> Result<Vec<usize>, SplitError> {
    let mut boundaries = Vec::with_capacity(k);
    let mut run = T::ZERO;

    for (index, &value) in seq.iter().enumerate() {
        run = T::accumulate(run, value).ok_or(SplitError::Overflow { index })?;
        if run == target {
            boundaries.push(index + 1);
            run = T::ZERO;
            if boundaries.len() == k {
                break;
            }
        }
    }

    Ok(boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_three_way_split() {
        // Total 9, target 3: [1,2] [3] [0,3].
        let seq = [1, 2, 3, 0, 3];
        assert!(can_partition(&seq, 3).unwrap());

        let p = partition(&seq, 3).unwrap();
        assert_eq!(p.segments, vec![vec![1, 2], vec![3], vec![0, 3]]);
        assert_eq!(p.target_sum, 3i64);
        assert_eq!(p.consumed, 5);
    }

    #[test]
    fn test_all_zero_sequence() {
        // Target 0: every zero closes a segment, the fourth is discarded.
        let seq = [0, 0, 0, 0];
        assert!(can_partition(&seq, 3).unwrap());

        let p = partition(&seq, 3).unwrap();
        assert_eq!(p.segments, vec![vec![0], vec![0], vec![0]]);
        assert_eq!(p.consumed, 3);
    }

    #[test]
    fn test_divisible_total_but_no_contiguous_split() {
        // Total 21 divides by 3 (target 7), but the prefix sums are
        // 1, 3, 6, 10, 15, 21, never exactly 7.
        let seq = [1, 2, 3, 4, 5, 6];
        assert!(!can_partition(&seq, 3).unwrap());
        assert!(matches!(
            partition(&seq, 3),
            Err(SplitError::Impossible { .. })
        ));
    }

    #[test]
    fn test_sequence_shorter_than_k() {
        let seq = [1, -1, 1, -1];
        assert!(!can_partition(&seq, 5).unwrap());
        assert!(matches!(
            partition(&seq, 5),
            Err(SplitError::InvalidInput { len: 4, k: 5 })
        ));
    }

    #[test]
    fn test_k_zero_is_invalid() {
        let seq = [1, 2, 3];
        assert!(!can_partition(&seq, 0).unwrap());
        assert!(matches!(
            partition(&seq, 0),
            Err(SplitError::InvalidInput { len: 3, k: 0 })
        ));
    }

    #[test]
    fn test_total_not_divisible() {
        let seq = [1, 2, 4];
        assert!(!can_partition(&seq, 3).unwrap());
        assert!(matches!(
            partition(&seq, 3),
            Err(SplitError::Impossible { .. })
        ));
    }

    #[test]
    fn test_single_segment() {
        let seq = [4i64, -2, 9, 0, 1];
        let p = partition(&seq, 1).unwrap();
        assert_eq!(p.segments, vec![vec![4, -2, 9, 0, 1]]);
        assert_eq!(p.target_sum, 12);
        assert_eq!(p.consumed, 5);
    }

    #[test]
    fn test_one_element_per_segment() {
        let seq = [2, 2, 2, 2];
        let p = partition(&seq, 4).unwrap();
        assert_eq!(p.num_segments(), 4);
        assert!(p.segments.iter().all(|s| s == &vec![2]));
    }

    #[test]
    fn test_trailing_elements_discarded() {
        // Total 3, target 3: the first element alone closes the single
        // segment and the scan stops; [-3, 3] is never examined.
        let seq = [3, -3, 3];
        let p = partition(&seq, 1).unwrap();
        assert_eq!(p.segments, vec![vec![3]]);
        assert_eq!(p.consumed, 1);
    }

    #[test]
    fn test_negative_elements() {
        // Total 0, target 0: [1,-1] [1,-1].
        let seq = [1, -1, 1, -1];
        let p = partition(&seq, 2).unwrap();
        assert_eq!(p.segments, vec![vec![1, -1], vec![1, -1]]);
    }

    #[test]
    fn test_overshoot_never_recovers() {
        // Total 8, target 4: running sum goes 3, 8 and skips right past 4.
        let seq = [3, 5];
        assert!(!can_partition(&seq, 2).unwrap());
    }

    #[test]
    fn test_float_split() {
        // Total 8.0, target 4.0: [1.5,2.5] [2.0,2.0].
        let seq = [1.5f64, 2.5, 2.0, 2.0];
        assert!(can_partition(&seq, 2).unwrap());

        let p = partition(&seq, 2).unwrap();
        assert_eq!(p.segments, vec![vec![1.5, 2.5], vec![2.0, 2.0]]);
        assert_eq!(p.target_sum, 4.0);
    }

    #[test]
    fn test_f32_split() {
        let seq = [0.5f32, 0.5, 1.0];
        let p = partition(&seq, 2).unwrap();
        assert_eq!(p.segments, vec![vec![0.5, 0.5], vec![1.0]]);
    }

    #[test]
    fn test_overflow_propagates_from_both_entry_points() {
        let seq = [i64::MAX, 1, -2];
        assert!(matches!(
            can_partition(&seq, 2),
            Err(SplitError::Overflow { index: 1 })
        ));
        assert!(matches!(
            partition(&seq, 2),
            Err(SplitError::Overflow { index: 1 })
        ));
    }

    #[test]
    fn test_feasibility_agrees_with_split() {
        // For every (seq, k) free of overflow, the boolean check and the
        // materializing split agree on feasibility.
        let sequences: [&[i64]; 6] = [
            &[1, 2, 3, 0, 3],
            &[0, 0, 0, 0],
            &[1, 2, 3, 4, 5, 6],
            &[1, -1, 1, -1],
            &[5],
            &[2, 2, 2, 2, 2, 2],
        ];

        for seq in sequences {
            for k in 0..=seq.len() + 1 {
                let feasible = can_partition(seq, k).unwrap();
                let split = partition(seq, k);
                assert_eq!(
                    feasible,
                    split.is_ok(),
                    "disagreement for seq {seq:?}, k {k}",
                );
                if let Ok(p) = split {
                    p.validate().unwrap();
                    assert_eq!(p.num_segments(), k);
                }
            }
        }
    }

    #[test]
    fn test_split_is_idempotent() {
        let seq = [1, 2, 3, 0, 3];
        let first = partition(&seq, 3).unwrap();
        let second = partition(&seq, 3).unwrap();
        assert_eq!(first, second);
    }
}
