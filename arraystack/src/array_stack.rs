// arraystack - arraystack
// Module: ArrayStack - Inline-storage LIFO stack
//
// Copyright (c) 2025 The arraystack Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// MaybeUninit slot access; every block states the initialized range it relies on
#![allow(unsafe_code)]

//! Fixed-capacity LIFO stack with inline storage and compile-time capacity.
//!
//! `ArrayStack<T, N, P>` holds at most `N` elements of `T` in an inline
//! `[MaybeUninit<T>; N]`. It never allocates and never grows.
//!
//! # Characteristics
//!
//! - **Zero allocation**: all memory is inline
//! - **Const-time operations**: `push()`, `pop()`, `top()` are O(1)
//! - **No partial effects**: a failed operation leaves the stack untouched
//! - **RAII cleanup**: live elements are dropped exactly once
//! - **Selectable error mode**: the `P` policy reports or traps violations

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut};
use core::{ptr, slice};

use arraystack_error::{precondition, Error, Result};

use crate::policy::{DefaultPolicy, ViolationPolicy};
use crate::synth;

/// A LIFO stack with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Slots `[0, len)` are initialized, index `len - 1` is the top
/// 3. Slots `[len, N)` are never read
///
/// # Examples
///
/// ```
/// use arraystack::{ArrayStack, Report};
///
/// let mut stack = ArrayStack::<u32, 3, Report>::new();
/// stack.push(1)?;
/// stack.push(2)?;
/// stack.push(3)?;
/// assert!(stack.is_full());
/// assert!(stack.push(4).is_err());
///
/// assert_eq!(stack.pop()?, 3);
/// assert_eq!(*stack.top()?, 2);
/// assert_eq!(stack[0], 1);
/// # Ok::<(), arraystack::Error>(())
/// ```
pub struct ArrayStack<T, const N: usize, P = DefaultPolicy> {
    /// Inline storage, bottom at index 0
    data: [MaybeUninit<T>; N],

    /// Number of live elements
    /// Invariant: len <= N
    len: usize,

    _policy: PhantomData<fn() -> P>,
}

impl<T, const N: usize, P> ArrayStack<T, N, P> {
    /// The compile-time capacity.
    pub const CAPACITY: usize = N;

    /// Creates a new empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [const { MaybeUninit::uninit() }; N],
            len: 0,
            _policy: PhantomData,
        }
    }

    /// Creates a full stack from an array of exactly `N` elements.
    ///
    /// `array[0]` ends at the bottom and `array[N - 1]` on top. The length is
    /// checked by the type system, so this cannot fail.
    #[must_use]
    pub fn from_array(array: [T; N]) -> Self {
        Self {
            data: array.map(MaybeUninit::new),
            len: N,
            _policy: PhantomData,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the stack holds `N` elements.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the element at `index`, or `None` outside `[0, len)`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` mutably, or `None` outside `[0, len)`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Drops every live element and resets the length to zero.
    ///
    /// # Time Complexity
    ///
    /// O(n) where n = len.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the full contents of two stacks.
    ///
    /// Elements are moved bitwise as a whole; no element code runs, so there
    /// is no intermediate state to observe.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized and MaybeUninit<T> has the
        // layout of T.
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, with unique access through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Writes `value` into the first free slot. Caller guarantees `len < N`.
    #[inline]
    fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < N);
        let index = self.len;
        self.len += 1;
        self.data[index].write(value)
    }

    /// Drops the elements in `[new_len, len)`.
    fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = self.len - new_len;
        // len is reset before any destructor runs, so no slot is dropped twice.
        self.len = new_len;
        let tail_ptr = self.data[new_len..].as_mut_ptr().cast::<T>();
        // SAFETY: slots [new_len, new_len + tail) were initialized and are no
        // longer counted as live.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(tail_ptr, tail));
        }
    }
}

impl<T, const N: usize, P: ViolationPolicy> ArrayStack<T, N, P> {
    /// Creates a stack from an external sequence, first element at the
    /// bottom.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the sequence yields more than `N`
    /// elements. The sequence is never truncated; elements taken so far are
    /// dropped.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::StackTrace::constructing(N, lower).entered();

        precondition!(lower <= N, P::violation(Error::CAPACITY_EXCEEDED, 0, N))?;

        let mut stack = Self::new();
        for item in iter {
            precondition!(
                !stack.is_full(),
                P::violation(Error::CAPACITY_EXCEEDED, stack.len, N)
            )?;
            stack.push_unchecked(item);
        }
        Ok(stack)
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns `StackOverflow` if the stack is full; `value` is dropped and
    /// the stack is unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<()> {
        self.ensure_room(1)?;
        self.push_unchecked(value);
        Ok(())
    }

    /// Pushes a clone of `value` onto the top of the stack.
    ///
    /// The clone is only made when there is room.
    ///
    /// # Errors
    ///
    /// Returns `StackOverflow` if the stack is full.
    #[inline]
    pub fn push_cloned(&mut self, value: &T) -> Result<()>
    where
        T: Clone,
    {
        self.ensure_room(1)?;
        self.push_unchecked(value.clone());
        Ok(())
    }

    /// Constructs a new element in place on top of the stack and returns it.
    ///
    /// `make` runs only when there is room for the result.
    ///
    /// # Errors
    ///
    /// Returns `StackOverflow` if the stack is full; `make` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraystack::{ArrayStack, Report};
    ///
    /// let mut pairs = ArrayStack::<(i32, f64), 4, Report>::new();
    /// pairs.emplace(|| (1, 1.0))?;
    /// let (i, d) = *pairs.emplace(|| (2, 2.0))?;
    /// assert_eq!((i, d), (2, 2.0));
    /// # Ok::<(), arraystack::Error>(())
    /// ```
    #[inline]
    pub fn emplace<F>(&mut self, make: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        self.ensure_room(1)?;
        let value = make();
        Ok(self.push_unchecked(value))
    }

    /// Pushes every element of a sequence, in order.
    ///
    /// All-or-nothing: a sequence whose size hint already exceeds the free
    /// room is rejected before any element is taken; otherwise, if the stack
    /// fills up part way, the elements pushed by this call are dropped again
    /// before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns `StackOverflow` if the sequence does not fit.
    pub fn push_range<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::StackTrace::pushing_range(self.len, N, lower).entered();

        self.ensure_room(lower)?;

        let start = self.len;
        for item in iter {
            if let Err(error) = self.ensure_room(1) {
                #[cfg(feature = "tracing")]
                let _rollback = crate::tracing::StackTrace::rolling_back(self.len, start).entered();
                drop(item);
                self.truncate(start);
                return Err(error);
            }
            self.push_unchecked(item);
        }
        Ok(())
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStack` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.ensure_live()?;
        self.len -= 1;
        // SAFETY: the slot at the old top was initialized and is no longer
        // counted as live, so it is read exactly once.
        Ok(unsafe { self.data[self.len].assume_init_read() })
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStack` if the stack is empty.
    #[inline]
    pub fn top(&self) -> Result<&T> {
        self.ensure_live()?;
        // SAFETY: len > 0 and slot len - 1 is initialized.
        Ok(unsafe { self.data[self.len - 1].assume_init_ref() })
    }

    /// Returns a mutable reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStack` if the stack is empty.
    #[inline]
    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.ensure_live()?;
        // SAFETY: len > 0 and slot len - 1 is initialized.
        Ok(unsafe { self.data[self.len - 1].assume_init_mut() })
    }

    #[inline]
    fn ensure_room(&self, additional: usize) -> Result<()> {
        precondition!(
            additional <= N - self.len,
            P::violation(Error::STACK_OVERFLOW, self.len, N)
        )
    }

    #[inline]
    fn ensure_live(&self) -> Result<()> {
        precondition!(self.len > 0, P::violation(Error::EMPTY_STACK, self.len, N))
    }
}

/// Exchanges the full contents of two stacks.
#[inline]
pub fn swap<T, const N: usize, P>(a: &mut ArrayStack<T, N, P>, b: &mut ArrayStack<T, N, P>) {
    a.swap(b);
}

#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!(
        "{}: the len is {} but the index is {}",
        Error::INDEX_OUT_OF_BOUNDS.message,
        len,
        index
    )
}

impl<T, const N: usize, P> Index<usize> for ArrayStack<T, N, P> {
    type Output = T;

    /// Indexed read of a live element.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, in every error mode; the unused tail is
    /// never readable. Use [`ArrayStack::get`] for a checked read.
    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, self.len),
        }
    }
}

impl<T, const N: usize, P> IndexMut<usize> for ArrayStack<T, N, P> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, len),
        }
    }
}

// RAII: drop live elements only
impl<T, const N: usize, P> Drop for ArrayStack<T, N, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize, P> Default for ArrayStack<T, N, P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, P> Clone for ArrayStack<T, N, P> {
    fn clone(&self) -> Self {
        let mut stack = Self::new();
        for item in self.as_slice() {
            stack.push_unchecked(item.clone());
        }
        stack
    }
}

impl<T: fmt::Debug, const N: usize, P> fmt::Debug for ArrayStack<T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, const N: usize, P> From<[T; N]> for ArrayStack<T, N, P> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<T: Clone, const N: usize, P: ViolationPolicy> TryFrom<&[T]> for ArrayStack<T, N, P> {
    type Error = Error;

    fn try_from(source: &[T]) -> Result<Self> {
        Self::try_from_iter(source.iter().cloned())
    }
}

impl<T: PartialEq, const N: usize, P> PartialEq for ArrayStack<T, N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize, P> Eq for ArrayStack<T, N, P> {}

impl<T: PartialOrd, const N: usize, P> PartialOrd for ArrayStack<T, N, P> {
    /// Lexicographic, bottom to top, with per-element ordering synthesized
    /// from `<` and `>`. Always `Some`.
    ///
    /// Elements for which neither `<` nor `>` holds compare `Equal` even when
    /// `==` is false, so for stacks holding NaN `a <= b && a >= b` does not
    /// imply `a == b`. Slice comparison would return `None` there instead.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(synth::lexicographic(self.as_slice(), other.as_slice()))
    }
}

impl<T: Ord, const N: usize, P> Ord for ArrayStack<T, N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

// Hash implementation for use in hash-based collections
impl<T: Hash, const N: usize, P> Hash for ArrayStack<T, N, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;
    use crate::policy::Report;

    #[kani::proof]
    fn verify_lifo_order() {
        let mut stack: ArrayStack<u8, 4, Report> = ArrayStack::new();

        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        assert!(stack.pop() == Ok(3));
        assert!(stack.pop() == Ok(2));
        assert!(stack.pop() == Ok(1));
        assert!(stack.pop().is_err());
    }

    #[kani::proof]
    fn verify_capacity_enforcement() {
        let mut stack: ArrayStack<u8, 3, Report> = ArrayStack::new();
        let value: u8 = kani::any();

        assert!(stack.push(value).is_ok());
        assert!(stack.push(value).is_ok());
        assert!(stack.push(value).is_ok());
        assert!(stack.push(value).is_err());

        assert!(stack.len() == 3);
        assert!(stack.top() == Ok(&value));
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_push_range_all_or_nothing() {
        let mut stack: ArrayStack<u32, 4, Report> = ArrayStack::new();
        stack.push(7).unwrap();

        let extra: usize = kani::any();
        kani::assume(extra <= 5);
        let result = stack.push_range((0..extra as u32).filter(|_| true));

        if extra <= 3 {
            assert!(result.is_ok());
            assert!(stack.len() == 1 + extra);
        } else {
            assert!(result.is_err());
            assert!(stack.len() == 1);
            assert!(stack.top() == Ok(&7));
        }
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_drop_cleanup() {
        let mut stack: ArrayStack<u32, 5, Report> = ArrayStack::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        drop(stack); // KANI verifies no leaks
    }
}

// ============================================================================
// Tests
// ============================================================================
