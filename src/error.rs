// Copyright (c) 2025 The segment-splitter developers
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for sequence splitting.

/// Errors that can occur while splitting a sequence.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// `k` is zero, or the sequence is too short for `k` non-empty segments.
    #[error("invalid input: cannot split {len} element(s) into {k} non-empty segment(s)")]
    InvalidInput { len: usize, k: usize },

    /// The wide accumulator overflowed while summing an integral sequence.
    #[error("integer overflow while accumulating element at index {index}")]
    Overflow { index: usize },

    /// No split into `k` contiguous equal-sum segments exists.
    #[error("split impossible: {detail}")]
    Impossible { detail: String },

    /// A materialized partition violated its own invariants.
    #[error("invalid partition: {detail}")]
    InvalidPartition { detail: String },
}
