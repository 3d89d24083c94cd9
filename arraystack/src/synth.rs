// arraystack - arraystack
// Module: Synthesized Ordering
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Orderings synthesized from `<` and `>` alone.
//!
//! Some element types only answer "less than" and "greater than"; their
//! `partial_cmp` may return `None`, or may not be consistent with
//! `PartialEq`. The helpers here never call `partial_cmp` or `==`: two values
//! compare equal exactly when neither `<` nor `>` holds.

use core::cmp::Ordering;

/// Three-way comparison built from `<` and `>` only.
#[inline]
#[must_use]
pub fn synth_three_way<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Equivalence: neither `a < b` nor `a > b`.
#[inline]
#[must_use]
pub fn synth_eq<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    !(a < b) && !(a > b)
}

/// `a < b` or equivalent.
#[inline]
#[must_use]
pub fn synth_le<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b || synth_eq(a, b)
}

/// `a > b` or equivalent.
#[inline]
#[must_use]
pub fn synth_ge<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b || synth_eq(a, b)
}

/// Lexicographic comparison of two sequences using [`synth_three_way`] per
/// element. A sequence that is a strict prefix of the other is less.
#[must_use]
pub fn lexicographic<T: PartialOrd>(a: &[T], b: &[T]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match synth_three_way(x, y) {
            Ordering::Equal => {}
            decided => return decided,
        }
    }
    a.len().cmp(&b.len())
}
