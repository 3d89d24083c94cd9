// arraystack - arraystack
// Module: Tracing Support
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for stack operations
//!
//! This module provides structured tracing capabilities that work in both
//! std and no_std environments. It wraps the `tracing` crate and provides
//! span helpers for the bulk operations of [`ArrayStack`](crate::ArrayStack).
//! Contract violations are reported as events by the
//! [violation policies](crate::policy).

#![cfg(feature = "tracing")]

pub use ::tracing::{debug, error, info, trace, warn};
pub use ::tracing::{debug_span, trace_span};
pub use ::tracing::{Level, Span};

/// Span helpers for stack operations
#[derive(Debug, Clone)]
pub struct StackTrace;

impl StackTrace {
    /// Create a span for construction from an external sequence
    #[inline]
    pub fn constructing(capacity: usize, size_hint: usize) -> Span {
        trace_span!("stack_construct", capacity = %capacity, size_hint = %size_hint)
    }

    /// Create a span for a `push_range` call
    #[inline]
    pub fn pushing_range(len: usize, capacity: usize, size_hint: usize) -> Span {
        trace_span!("stack_push_range", len = %len, capacity = %capacity, size_hint = %size_hint)
    }

    /// Create a span for a rollback of a partially applied `push_range`
    #[inline]
    pub fn rolling_back(from: usize, to: usize) -> Span {
        debug_span!("stack_rollback", from = %from, to = %to)
    }
}
