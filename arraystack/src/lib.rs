// arraystack - arraystack
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity LIFO stack with inline storage.
//!
//! [`ArrayStack<T, N, P>`](ArrayStack) holds at most `N` elements of `T`
//! inline, with `N` fixed at compile time. It never allocates, never grows,
//! and owns every element it holds.
//!
//! # Error Modes
//!
//! Contract violations (push on a full stack, pop or top on an empty one, an
//! oversized construction source) are handled by the policy parameter `P`:
//!
//! - [`Report`]: the operation returns `Err(Error)` and has no effect.
//! - [`Trap`]: the operation panics; there is no recovery path.
//!
//! [`DefaultPolicy`] is `Report`, or `Trap` when built with the
//! `trap-on-violation` feature. Both modes share one API and produce the
//! same results when no precondition is violated.
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (`std::error::Error` on
//!   [`Error`])
//! - `tracing`: Emits a structured event for every contract violation
//! - `trap-on-violation`: Makes [`Trap`] the default policy
//! - Default: Pure `no_std` without allocation
//!
//! # Examples
//!
//! ```
//! use arraystack::{ArrayStack, Error, Report};
//!
//! let mut stack = ArrayStack::<i32, 2, Report>::try_from_iter([1, 2])?;
//! assert_eq!(stack.push(3), Err(Error::STACK_OVERFLOW));
//! assert_eq!(stack.pop()?, 2);
//! # Ok::<(), Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

/// Fixed-capacity stack type
pub mod array_stack;
/// Contract violation policies
pub mod policy;
/// Orderings synthesized from `<` and `>`
pub mod synth;
/// Structured tracing for stack operations
#[cfg(feature = "tracing")]
pub mod tracing;

pub use array_stack::{swap, ArrayStack};
pub use policy::{DefaultPolicy, ErrorMode, Report, Trap, ViolationPolicy, ERROR_MODE};

// Re-export error related types for convenience
pub use arraystack_error::{codes, kinds, Error, ErrorCategory, Result};
