// arraystack - arraystack-error
// Module: Error Types
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Error types for stack contract violations
///
/// This module provides the single error value reported by every stack
/// operation, its categories, and the conversions from error kinds.
use core::fmt;

use crate::{codes, kinds};

/// `Error` categories for stack operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Capacity errors (overflow, oversized construction source)
    Capacity = 1,
    /// State errors (operation requires a non-empty stack)
    State    = 2,
    /// Bounds errors (index outside the live range)
    Bounds   = 3,
}

/// Stack `Error` type
///
/// Carries a category, a numeric code and a static message. Two errors are
/// equal when category and code match; the message is derived from them.
#[derive(Debug, Copy, Clone)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Capacity exceeded while constructing from a source sequence
    pub const CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_EXCEEDED,
        "capacity exceeded",
    );
    /// Top read or removal on an empty stack
    pub const EMPTY_STACK: Self =
        Self::new(ErrorCategory::State, codes::EMPTY_STACK, "empty stack");
    /// Indexed access outside the live range
    pub const INDEX_OUT_OF_BOUNDS: Self = Self::new(
        ErrorCategory::Bounds,
        codes::INDEX_OUT_OF_BOUNDS,
        "index out of bounds",
    );
    /// Insertion into a full stack
    pub const STACK_OVERFLOW: Self = Self::new(
        ErrorCategory::Capacity,
        codes::STACK_OVERFLOW,
        "stack overflow",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is a stack overflow error
    #[must_use]
    pub fn is_stack_overflow(&self) -> bool {
        self.code == codes::STACK_OVERFLOW
    }

    /// Check if this is an empty stack error
    #[must_use]
    pub fn is_empty_stack(&self) -> bool {
        self.code == codes::EMPTY_STACK
    }

    /// Check if this is a capacity exceeded error
    #[must_use]
    pub fn is_capacity_exceeded(&self) -> bool {
        self.code == codes::CAPACITY_EXCEEDED
    }

    /// Check if this is a capacity-category error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.code == other.code
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// -- From<kinds::X> for Error implementations --
impl From<kinds::StackOverflow> for Error {
    fn from(_e: kinds::StackOverflow) -> Self {
        Self::STACK_OVERFLOW
    }
}

impl From<kinds::EmptyStack> for Error {
    fn from(_e: kinds::EmptyStack) -> Self {
        Self::EMPTY_STACK
    }
}

impl From<kinds::CapacityExceeded> for Error {
    fn from(_e: kinds::CapacityExceeded) -> Self {
        Self::CAPACITY_EXCEEDED
    }
}

impl From<kinds::IndexOutOfBounds> for Error {
    fn from(_e: kinds::IndexOutOfBounds) -> Self {
        Self::INDEX_OUT_OF_BOUNDS
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn test_display_format() {
        let shown = format!("{}", Error::STACK_OVERFLOW);
        assert_eq!(shown, "[Capacity][E03E9] stack overflow");

        let shown = format!("{}", Error::EMPTY_STACK);
        assert_eq!(shown, "[State][E03E8] empty stack");
    }

    #[test]
    fn test_equality_ignores_message() {
        let custom = Error::new(ErrorCategory::Capacity, codes::STACK_OVERFLOW, "full");
        assert_eq!(custom, Error::STACK_OVERFLOW);
        assert_ne!(Error::STACK_OVERFLOW, Error::CAPACITY_EXCEEDED);
    }

    #[test]
    fn test_predicates() {
        assert!(Error::STACK_OVERFLOW.is_stack_overflow());
        assert!(Error::STACK_OVERFLOW.is_capacity_error());
        assert!(Error::CAPACITY_EXCEEDED.is_capacity_error());
        assert!(Error::EMPTY_STACK.is_empty_stack());
        assert!(!Error::EMPTY_STACK.is_capacity_error());
        assert!(Error::CAPACITY_EXCEEDED.is_capacity_exceeded());
    }
}
