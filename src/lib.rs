// Copyright (c) 2025 The segment-splitter developers
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # segment-splitter
//!
//! Splits an ordered numeric sequence into exactly `k` contiguous,
//! non-empty segments of equal sum.
//!
//! This crate provides:
//! - [`can_partition`] — boolean feasibility check.
//! - [`partition()`] — the materializing split, producing a [`Partition`].
//! - [`total_sum`] — overflow-guarded summation into a wide accumulator.
//! - [`Summable`] — the numeric element bound, implemented for `i32`,
//!   `i64`, `f32`, and `f64`.
//!
//! # Design Goals
//! - Pure functions over borrowed input: no mutation, no shared state, no I/O.
//! - Integral sums accumulate in 64 bits with explicit overflow detection;
//!   floating-point sums accumulate natively and are not guarded.
//! - Clean error types via `thiserror`: invalid input and infeasible splits
//!   are ordinary outcomes, accumulator overflow is a distinct fault. The
//!   boolean check swallows invalid input as `false` but still surfaces
//!   overflow, mirroring the split variant's error contract.
//!
//! # Example
//! ```
//! use segment_splitter::{can_partition, partition};
//!
//! let seq = [1, 2, 3, 0, 3];
//! assert!(can_partition(&seq, 3).unwrap());
//!
//! let split = partition(&seq, 3).unwrap();
//! assert_eq!(split.segments, vec![vec![1, 2], vec![3], vec![0, 3]]);
//! assert_eq!(split.target_sum, 3i64);
//! ```

mod element;
mod error;
mod partition;
mod split;
mod sum;

pub use element::Summable;
pub use error::SplitError;
pub use partition::Partition;
pub use split::{can_partition, partition};
pub use sum::total_sum;
