// Copyright (c) 2025 The segment-splitter developers
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Supported sequence element types and their wide accumulators.

use std::fmt;

/// Trait for numeric element types whose sequences can be split into
/// equal-sum segments.
///
/// Each element type is bound to a wide accumulator used for the total sum
/// and for running sums during the segment scan:
///
/// | Element | Accumulator | Overflow guard |
/// |---|---|---|
/// | `i32` | `i64` | checked |
/// | `i64` | `i64` | checked |
/// | `f32` | `f32` | none (IEEE saturates to ±∞) |
/// | `f64` | `f64` | none (IEEE saturates to ±∞) |
///
/// Integral accumulation is checked: [`Summable::accumulate`] returns `None`
/// when the running sum would leave the accumulator's range. Floating-point
/// accumulation is native and unguarded.
pub trait Summable: Copy + PartialEq + fmt::Debug {
    /// The wide accumulator for sums of this element type.
    type Accum: Copy + PartialEq + fmt::Debug + fmt::Display;

    /// The accumulator's zero, the starting value of every sum.
    const ZERO: Self::Accum;

    /// Adds `value` to `acc`, returning `None` if the result is not
    /// representable in the accumulator.
    fn accumulate(acc: Self::Accum, value: Self) -> Option<Self::Accum>;

    /// Returns `true` when `total` divides into `parts` equal target sums.
    fn divides_evenly(total: Self::Accum, parts: usize) -> bool;

    /// The per-segment target sum, `total / parts`.
    ///
    /// Callers must ensure `parts > 0` and, for integral accumulators, that
    /// [`Summable::divides_evenly`] holds.
    fn segment_target(total: Self::Accum, parts: usize) -> Self::Accum;
}

impl Summable for i32 {
    type Accum = i64;

    const ZERO: i64 = 0;

    fn accumulate(acc: i64, value: i32) -> Option<i64> {
        acc.checked_add(i64::from(value))
    }

    fn divides_evenly(total: i64, parts: usize) -> bool {
        total % parts as i64 == 0
    }

    fn segment_target(total: i64, parts: usize) -> i64 {
        total / parts as i64
    }
}

impl Summable for i64 {
    type Accum = i64;

    const ZERO: i64 = 0;

    fn accumulate(acc: i64, value: i64) -> Option<i64> {
        acc.checked_add(value)
    }

    fn divides_evenly(total: i64, parts: usize) -> bool {
        total % parts as i64 == 0
    }

    fn segment_target(total: i64, parts: usize) -> i64 {
        total / parts as i64
    }
}

impl Summable for f32 {
    type Accum = f32;

    const ZERO: f32 = 0.0;

    fn accumulate(acc: f32, value: f32) -> Option<f32> {
        Some(acc + value)
    }

    fn divides_evenly(total: f32, parts: usize) -> bool {
        total % parts as f32 == 0.0
    }

    fn segment_target(total: f32, parts: usize) -> f32 {
        total / parts as f32
    }
}

impl Summable for f64 {
    type Accum = f64;

    const ZERO: f64 = 0.0;

    fn accumulate(acc: f64, value: f64) -> Option<f64> {
        Some(acc + value)
    }

    fn divides_evenly(total: f64, parts: usize) -> bool {
        total % parts as f64 == 0.0
    }

    fn segment_target(total: f64, parts: usize) -> f64 {
        total / parts as f64
    }
}
