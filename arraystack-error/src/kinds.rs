// arraystack - arraystack-error
// Module: Error Kinds
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Defines the specific error kinds raised by stack operations.
//!
//! Each kind is a zero-sized marker with a stable `Display` text that
//! matches the message of the corresponding [`Error`](crate::Error)
//! constant.

use core::fmt::{self, Display};

/// Insertion attempted while `len == capacity`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackOverflow;
impl Display for StackOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack overflow")
    }
}

/// Top read or removal attempted while `len == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStack;
impl Display for EmptyStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "empty stack")
    }
}

/// Construction source holds more elements than the capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded;
impl Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity exceeded")
    }
}

/// Indexed access at or past the live length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds;
impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index out of bounds")
    }
}
