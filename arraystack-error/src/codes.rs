// arraystack - arraystack-error
// Module: Error Codes
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for arraystack

// Stack error codes (1000-1999)
/// Read or removal of the top of an empty stack
pub const EMPTY_STACK: u16 = 1000;
/// Insertion into a full stack
pub const STACK_OVERFLOW: u16 = 1001;
/// Construction source longer than the stack capacity
pub const CAPACITY_EXCEEDED: u16 = 1002;
/// Indexed access outside the live range
pub const INDEX_OUT_OF_BOUNDS: u16 = 1003;

