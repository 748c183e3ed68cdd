/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for atomic types, providing a unified interface
//! for atomic operations.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all atomic scalar wrappers.
///
/// Provides the basic atomic operations: load, store, swap, and
/// compare-and-swap.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Loads the current value.
    ///
    /// Uses `Acquire` ordering.
    fn load(&self) -> Self::Value;

    /// Stores a new value unconditionally.
    ///
    /// Uses `Release` ordering.
    fn store(&self, value: Self::Value);

    /// Swaps in a new value, returning the previous one.
    ///
    /// Uses `AcqRel` ordering.
    fn swap(&self, value: Self::Value) -> Self::Value;

    /// Replaces the value with `new` if it currently equals `old`.
    ///
    /// Uses `AcqRel` ordering on success and `Acquire` ordering on failure.
    ///
    /// # Returns
    ///
    /// `true` if the swap happened.
    fn cas(&self, old: Self::Value, new: Self::Value) -> bool;
}

/// Trait for atomic integer wrappers.
///
/// Every operation returns the value *after* the update.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicInteger: Atomic {
    /// Adds `delta`, wrapping on overflow, returning the new value.
    fn add(&self, delta: Self::Value) -> Self::Value;

    /// Subtracts `delta`, wrapping on overflow, returning the new value.
    fn sub(&self, delta: Self::Value) -> Self::Value;

    /// Adds one, returning the new value.
    fn inc(&self) -> Self::Value;

    /// Subtracts one, returning the new value.
    fn dec(&self) -> Self::Value;
}
