// arraystack - arraystack-error
// Module: Error Handling
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the `arraystack` collection.
//!
//! Every contract violation of a fixed-capacity stack maps to one static,
//! allocation-free [`Error`] value. The error carries a category, a numeric
//! code and a stable message, so it can be matched, displayed and compared
//! in `no_std` builds without an allocator.
//!
//! # Error Codes
//!
//! ## Stack Errors (1000-1999)
//! - Empty stack (read or removal of the top)
//! - Stack overflow (insertion into a full stack)
//! - Capacity exceeded (construction source longer than the capacity)
//! - Index out of bounds (indexed access past the live range)
//!
//! # Usage
//!
//! ```
//! use arraystack_error::{codes, kinds, Error, ErrorCategory};
//!
//! let error = Error::new(ErrorCategory::Capacity, codes::STACK_OVERFLOW, "stack overflow");
//! assert_eq!(error, Error::STACK_OVERFLOW);
//!
//! let from_kind: Error = kinds::EmptyStack.into();
//! assert_eq!(from_kind.message, "empty stack");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for arraystack
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

// Macros for checked preconditions
#[macro_use]
pub mod macros;

pub use errors::{Error, ErrorCategory};
pub use kinds::{CapacityExceeded, EmptyStack, IndexOutOfBounds, StackOverflow};

/// A specialized `Result` type for stack operations.
pub type Result<T> = core::result::Result<T, Error>;
