// Copyright (c) 2025 The segment-splitter developers
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Overflow-guarded summation into the wide accumulator.

use crate::element::Summable;
use crate::SplitError;

/// Sums all elements of `seq` into the element type's wide accumulator.
///
/// Integral accumulation is checked element by element; the first addition
/// that would leave the accumulator's range fails with
/// [`SplitError::Overflow`] carrying the offending element's index.
/// Floating-point accumulation is native and never fails.
///
/// An empty sequence sums to zero.
///
/// # Errors
/// Returns [`SplitError::Overflow`] if an integral running sum leaves the
/// accumulator's range.
pub fn total_sum<T: Summable>(seq: &[T]) -> Result<T::Accum, SplitError> {
    let mut total = T::ZERO;
    for (index, &value) in seq.iter().enumerate() {
        total = T::accumulate(total, value).ok_or(SplitError::Overflow { index })?;
    }
    Ok(total)
}
