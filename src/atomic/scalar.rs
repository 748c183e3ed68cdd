/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Scalar Dispatch
//!
//! Maps each supported fixed-width integer onto its `std::sync::atomic` cell
//! and onto a signedness marker, so that a single generic wrapper can select
//! the right atomic primitive through the type parameter.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use serde::de::DeserializeOwned;
use serde::Serialize;

mod private {
    pub trait Sealed {}
}

/// A fixed-width integer that has a native atomic cell.
///
/// This trait exposes exactly the primitive set the wrappers are built on:
/// `load`, `store`, `fetch_add`, `compare_exchange` and `swap`, together with
/// the wrapping arithmetic needed to derive subtraction. It is sealed; the
/// implementations cover `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`,
/// `u32`, `u64` and `usize`.
///
/// # Author
///
/// Haixing Hu
pub trait Scalar:
    Copy
    + Eq
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
    + private::Sealed
{
    /// The `std::sync::atomic` cell holding a value of this type.
    type Cell: Send + Sync;

    /// Either [`Signed`] or [`Unsigned`].
    type Sign: Signedness;

    /// The additive identity.
    const ZERO: Self;

    /// The value `1`.
    const ONE: Self;

    /// Creates a cell holding `value`.
    fn new_cell(value: Self) -> Self::Cell;

    /// Atomically loads the cell.
    fn load(cell: &Self::Cell, order: Ordering) -> Self;

    /// Atomically stores into the cell.
    fn store(cell: &Self::Cell, value: Self, order: Ordering);

    /// Atomically adds `delta`, wrapping on overflow, and returns the
    /// previous value.
    fn fetch_add(cell: &Self::Cell, delta: Self, order: Ordering) -> Self;

    /// Atomically replaces `current` with `new`.
    ///
    /// Returns `Ok(previous)` on success and `Err(actual)` on failure.
    fn compare_exchange(
        cell: &Self::Cell,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;

    /// Atomically replaces the value and returns the previous one.
    fn swap(cell: &Self::Cell, value: Self, order: Ordering) -> Self;

    /// Modular addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Modular subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Modular negation.
    fn wrapping_neg(self) -> Self;

    /// Bitwise complement.
    fn bit_not(self) -> Self;
}

/// Selects how the two's-complement negation of a delta is computed.
///
/// [`AtomicInt::sub`](crate::AtomicInt::sub) is an atomic add of
/// `T::Sign::negate(delta)`. Both strategies yield the bit pattern of
/// `0 - delta` modulo `2^N` for every `delta`, including `0` and the
/// extremes of the type.
pub trait Signedness {
    /// Whether this is the unsigned strategy.
    const UNSIGNED: bool;

    /// Returns the two's-complement negation of `n`.
    fn negate<T: Scalar>(n: T) -> T;
}

/// Marker for signed integers: negation is `n.wrapping_neg()`.
///
/// `negate(MIN)` is `MIN`, which is exactly what modular subtraction of
/// `MIN` requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signed {}

/// Marker for unsigned integers: negation is `!(n - 1)` in wrapping
/// arithmetic, since unsigned types have no unary minus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsigned {}

impl Signedness for Signed {
    const UNSIGNED: bool = false;

    #[inline]
    fn negate<T: Scalar>(n: T) -> T {
        n.wrapping_neg()
    }
}

impl Signedness for Unsigned {
    const UNSIGNED: bool = true;

    #[inline]
    fn negate<T: Scalar>(n: T) -> T {
        n.wrapping_sub(T::ONE).bit_not()
    }
}

/// Implements [`Scalar`] for one integer type.
///
/// # Parameters
///
/// * `$value_type` - The integer type (e.g., `i32`)
/// * `$cell_type` - The matching std atomic (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$sign` - [`Signed`] or [`Unsigned`]
macro_rules! impl_scalar {
    ($value_type:ty, $cell_type:ty, $sign:ty) => {
        impl private::Sealed for $value_type {}

        impl Scalar for $value_type {
            type Cell = $cell_type;
            type Sign = $sign;

            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn new_cell(value: Self) -> Self::Cell {
                <$cell_type>::new(value)
            }

            #[inline]
            fn load(cell: &Self::Cell, order: Ordering) -> Self {
                cell.load(order)
            }

            #[inline]
            fn store(cell: &Self::Cell, value: Self, order: Ordering) {
                cell.store(value, order);
            }

            #[inline]
            fn fetch_add(cell: &Self::Cell, delta: Self, order: Ordering) -> Self {
                cell.fetch_add(delta, order)
            }

            #[inline]
            fn compare_exchange(
                cell: &Self::Cell,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                cell.compare_exchange(current, new, success, failure)
            }

            #[inline]
            fn swap(cell: &Self::Cell, value: Self, order: Ordering) -> Self {
                cell.swap(value, order)
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$value_type>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$value_type>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$value_type>::wrapping_neg(self)
            }

            #[inline]
            fn bit_not(self) -> Self {
                !self
            }
        }
    };
}

impl_scalar!(i8, std::sync::atomic::AtomicI8, Signed);
impl_scalar!(i16, std::sync::atomic::AtomicI16, Signed);
impl_scalar!(i32, std::sync::atomic::AtomicI32, Signed);
impl_scalar!(i64, std::sync::atomic::AtomicI64, Signed);
impl_scalar!(isize, std::sync::atomic::AtomicIsize, Signed);
impl_scalar!(u8, std::sync::atomic::AtomicU8, Unsigned);
impl_scalar!(u16, std::sync::atomic::AtomicU16, Unsigned);
impl_scalar!(u32, std::sync::atomic::AtomicU32, Unsigned);
impl_scalar!(u64, std::sync::atomic::AtomicU64, Unsigned);
impl_scalar!(usize, std::sync::atomic::AtomicUsize, Unsigned);
