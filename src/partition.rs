// Copyright (c) 2025 The segment-splitter developers
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The materialized split result.
//!
//! A [`Partition`] is the ordered list of contiguous, equal-sum segments
//! produced by [`crate::partition()`], together with the target sum and the
//! number of input elements the segments consumed. The scan stops as soon
//! as `k` segments are complete, so `consumed` can be smaller than the
//! input length; trailing elements past the k-th boundary are discarded.

use crate::element::Summable;
use crate::SplitError;

/// An ordered split of a numeric sequence into contiguous, equal-sum segments.
///
/// Concatenating `segments` in order reproduces the first `consumed`
/// elements of the original input, and every segment sums to `target_sum`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(bound(serialize = "T: serde::Serialize, T::Accum: serde::Serialize"))]
pub struct Partition<T: Summable> {
    /// The segments, in input order. Each is non-empty.
    pub segments: Vec<Vec<T>>,
    /// The sum every segment matches: total sum divided by segment count.
    pub target_sum: T::Accum,
    /// Number of input elements covered by the segments.
    pub consumed: usize,
}

impl<T: Summable> Partition<T> {
    /// Returns the number of segments.
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Returns the total number of elements across all segments.
    pub fn total_elements(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }

    /// Consumes the partition, returning just the segments.
    pub fn into_segments(self) -> Vec<Vec<T>> {
        self.segments
    }

    /// Validates the partition invariants.
    ///
    /// Checks:
    /// - At least one segment, and no empty segments.
    /// - Every segment re-sums exactly to `target_sum`.
    /// - The segments hold exactly `consumed` elements.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.segments.is_empty() {
            return Err(SplitError::InvalidPartition {
                detail: "partition has no segments".into(),
            });
        }

        let mut elements = 0;
        for (i, segment) in self.segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(SplitError::InvalidPartition {
                    detail: format!("segment {i} is empty"),
                });
            }

            let mut sum = T::ZERO;
            for &value in segment {
                sum = T::accumulate(sum, value).ok_or_else(|| SplitError::InvalidPartition {
                    detail: format!("overflow while re-summing segment {i}"),
                })?;
            }
            if sum != self.target_sum {
                return Err(SplitError::InvalidPartition {
                    detail: format!(
                        "segment {i} sums to {sum}, expected {}",
                        self.target_sum,
                    ),
                });
            }

            elements += segment.len();
        }

        if elements != self.consumed {
            return Err(SplitError::InvalidPartition {
                detail: format!(
                    "segments hold {elements} element(s) but {} were consumed",
                    self.consumed,
                ),
            });
        }

        Ok(())
    }

    /// Returns a human-readable summary of the partition.
    pub fn summary(&self) -> String {
        let lens: Vec<usize> = self.segments.iter().map(Vec::len).collect();
        format!(
            "{} segment(s) with target sum {}, {} element(s) consumed, segment lengths: {lens:?}",
            self.num_segments(),
            self.target_sum,
            self.consumed,
        )
    }
}

/// Builder helper for constructing a `Partition` segment by segment.
///
/// Used internally by the split scan.
pub(crate) struct PartitionBuilder<T: Summable> {
    target_sum: T::Accum,
    segments: Vec<Vec<T>>,
    consumed: usize,
}

impl<T: Summable> PartitionBuilder<T> {
    /// Creates a new builder for segments matching `target_sum`.
    pub fn new(target_sum: T::Accum) -> Self {
        Self {
            target_sum,
            segments: Vec::new(),
            consumed: 0,
        }
    }

    /// Appends a completed segment.
    pub fn push_segment(&mut self, segment: Vec<T>) {
        self.consumed += segment.len();
        self.segments.push(segment);
    }

    /// Consumes the builder and returns the finished partition.
    pub fn build(self) -> Partition<T> {
        Partition {
            segments: self.segments,
            target_sum: self.target_sum,
            consumed: self.consumed,
        }
    }
}
