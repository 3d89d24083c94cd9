// arraystack - arraystack
// Module: Violation Policies
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Contract violation policies.
//!
//! A policy decides what happens when a stack operation is called with a
//! violated precondition (push on a full stack, pop or top on an empty one,
//! an oversized construction source):
//!
//! - [`Report`] hands the structured [`Error`] back to the caller as `Err`.
//! - [`Trap`] treats the violation as unrecoverable and panics. Builds with
//!   `panic = "abort"` terminate the process.
//!
//! The policy is a zero-sized type parameter of
//! [`ArrayStack`](crate::ArrayStack), so both modes share one API shape and
//! identical normal-path behavior. [`DefaultPolicy`] is `Report` unless the
//! crate is built with the `trap-on-violation` feature.

use arraystack_error::Error;

/// How contract violations surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMode {
    /// Violations return `Err` and leave the stack unmodified
    Report,
    /// Violations panic; there is no recovery path
    Trap,
}

/// Strategy invoked on every contract violation.
pub trait ViolationPolicy {
    /// The mode this policy implements
    const MODE: ErrorMode;

    /// Handle a violation detected on a stack holding `len` of `capacity`
    /// elements. Returns the error to propagate, or diverges.
    fn violation(error: Error, len: usize, capacity: usize) -> Error;
}

/// Structured-error policy: violations are returned to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Report;

/// Trap policy: violations panic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Trap;

impl ViolationPolicy for Report {
    const MODE: ErrorMode = ErrorMode::Report;

    #[inline]
    fn violation(error: Error, len: usize, capacity: usize) -> Error {
        #[cfg(feature = "tracing")]
        crate::tracing::warn!(code = error.code, len, capacity, "{}", error.message);
        #[cfg(not(feature = "tracing"))]
        let _ = (len, capacity);
        error
    }
}

impl ViolationPolicy for Trap {
    const MODE: ErrorMode = ErrorMode::Trap;

    #[cold]
    #[track_caller]
    fn violation(error: Error, len: usize, capacity: usize) -> Error {
        #[cfg(feature = "tracing")]
        crate::tracing::error!(code = error.code, len, capacity, "{}", error.message);
        panic!(
            "stack precondition violated: {} (len {}, capacity {})",
            error.message, len, capacity
        )
    }
}

/// Policy used when none is named explicitly.
#[cfg(not(feature = "trap-on-violation"))]
pub type DefaultPolicy = Report;

/// Policy used when none is named explicitly.
#[cfg(feature = "trap-on-violation")]
pub type DefaultPolicy = Trap;

/// The error mode of [`DefaultPolicy`] for this build.
pub const ERROR_MODE: ErrorMode = <DefaultPolicy as ViolationPolicy>::MODE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_returns_error_unchanged() {
        let error = Report::violation(Error::STACK_OVERFLOW, 2, 2);
        assert_eq!(error, Error::STACK_OVERFLOW);
        assert_eq!(error.message, "stack overflow");
    }

    #[test]
    #[should_panic(expected = "empty stack")]
    fn trap_panics_with_message() {
        let _ = Trap::violation(Error::EMPTY_STACK, 0, 4);
    }

    #[test]
    fn modes() {
        assert_eq!(Report::MODE, ErrorMode::Report);
        assert_eq!(Trap::MODE, ErrorMode::Trap);
    }

    #[cfg(not(feature = "trap-on-violation"))]
    #[test]
    fn default_mode_reports() {
        assert_eq!(ERROR_MODE, ErrorMode::Report);
    }

    #[cfg(feature = "trap-on-violation")]
    #[test]
    fn default_mode_traps() {
        assert_eq!(ERROR_MODE, ErrorMode::Trap);
    }
}
