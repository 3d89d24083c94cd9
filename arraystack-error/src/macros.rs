// arraystack - arraystack-error
// Module: Precondition Macros
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Macros for checked preconditions.

/// Check a precondition, yielding `Result<(), Error>`.
///
/// The error expression is evaluated only when the condition does not hold,
/// so it may diverge (a trapping policy) or carry side effects such as a
/// tracing event.
///
/// # Examples
///
/// ```
/// use arraystack_error::{precondition, Error, Result};
///
/// fn check_room(len: usize, capacity: usize) -> Result<()> {
///     precondition!(len < capacity, Error::STACK_OVERFLOW)
/// }
///
/// assert!(check_room(1, 2).is_ok());
/// assert_eq!(check_room(2, 2), Err(Error::STACK_OVERFLOW));
/// ```
#[macro_export]
macro_rules! precondition {
    ($condition:expr, $error:expr) => {{
        if $condition {
            ::core::result::Result::Ok(())
        } else {
            ::core::result::Result::Err($error)
        }
    }};
}
