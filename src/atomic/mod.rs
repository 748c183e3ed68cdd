/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Type-safe wrappers over `std::sync::atomic` integers, plus an atomic cell
//! for error values.
//!
//! Every integer wrapper is an instantiation of the single generic
//! [`AtomicInt<T>`]; the aliases below name the family members.
//!
//! # Author
//!
//! Haixing Hu

mod atomic_error;
mod atomic_int;
mod scalar;
mod traits;

pub use atomic_error::{AtomicError, SharedError};
pub use atomic_int::AtomicInt;
pub use scalar::{Scalar, Signed, Signedness, Unsigned};
pub use traits::{Atomic, AtomicInteger};

/// Atomic 8-bit signed integer.
pub type AtomicI8 = AtomicInt<i8>;
/// Atomic 16-bit signed integer.
pub type AtomicI16 = AtomicInt<i16>;
/// Atomic 32-bit signed integer.
pub type AtomicI32 = AtomicInt<i32>;
/// Atomic 64-bit signed integer.
pub type AtomicI64 = AtomicInt<i64>;
/// Atomic pointer-sized signed integer.
pub type AtomicIsize = AtomicInt<isize>;
/// Atomic 8-bit unsigned integer.
pub type AtomicU8 = AtomicInt<u8>;
/// Atomic 16-bit unsigned integer.
pub type AtomicU16 = AtomicInt<u16>;
/// Atomic 32-bit unsigned integer.
pub type AtomicU32 = AtomicInt<u32>;
/// Atomic 64-bit unsigned integer.
pub type AtomicU64 = AtomicInt<u64>;
/// Atomic pointer-sized unsigned integer.
pub type AtomicUsize = AtomicInt<usize>;
