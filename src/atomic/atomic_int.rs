/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer
//!
//! Provides the generic atomic integer wrapper shared by every width and
//! signedness.
//!
//! # Author
//!
//! Haixing Hu

use std::any::type_name;
use std::fmt;
use std::sync::atomic::Ordering;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::atomic::scalar::{Scalar, Signedness};
use crate::atomic::traits::{Atomic, AtomicInteger};
use crate::error::DecodeError;

/// Atomic wrapper around a fixed-width integer.
///
/// The wrapper owns a single cell that is only ever touched through atomic
/// primitives. Every operation is linearizable with respect to every other
/// operation on the same instance.
///
/// # Memory Ordering Strategy
///
/// - **Read operations** (`load`): `Acquire`.
/// - **Write operations** (`store`): `Release`.
/// - **Read-Modify-Write** (`add`, `sub`, `inc`, `dec`, `swap`, `cas`):
///   `AcqRel`, with `Acquire` on CAS failure.
///
/// # Arithmetic
///
/// All arithmetic is modular. `add` and `sub` wrap around at the bounds of
/// the type in every build profile and never panic. `sub(n)` is an atomic
/// add of the two's-complement negation of `n`, chosen by the type's
/// [`Signedness`] marker.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_int::AtomicU32;
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(AtomicU32::new(0));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let counter = counter.clone();
///     handles.push(thread::spawn(move || {
///         for _ in 0..100 {
///             counter.inc();
///         }
///     }));
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(counter.load(), 1000);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicInt<T: Scalar> {
    inner: T::Cell,
}

impl<T: Scalar> AtomicInt<T> {
    /// Creates a new wrapper holding `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            inner: T::new_cell(value),
        }
    }

    /// Atomically loads the wrapped value.
    #[inline]
    pub fn load(&self) -> T {
        T::load(&self.inner, Ordering::Acquire)
    }

    /// Atomically stores `value`.
    #[inline]
    pub fn store(&self, value: T) {
        T::store(&self.inner, value, Ordering::Release);
    }

    /// Atomically adds `delta` and returns the new value.
    ///
    /// Note that the value *after* the addition is returned, unlike
    /// `fetch_add` on the std atomics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_int::AtomicI8;
    ///
    /// let atomic = AtomicI8::new(i8::MAX);
    /// assert_eq!(atomic.add(1), i8::MIN);
    /// ```
    #[inline]
    pub fn add(&self, delta: T) -> T {
        T::fetch_add(&self.inner, delta, Ordering::AcqRel).wrapping_add(delta)
    }

    /// Atomically subtracts `delta` and returns the new value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_int::AtomicU64;
    ///
    /// let atomic = AtomicU64::new(10);
    /// assert_eq!(atomic.sub(3), 7);
    /// assert_eq!(atomic.sub(8), u64::MAX);
    /// ```
    #[inline]
    pub fn sub(&self, delta: T) -> T {
        self.add(<T::Sign as Signedness>::negate(delta))
    }

    /// Atomically increments the value and returns the new value.
    #[inline]
    pub fn inc(&self) -> T {
        self.add(T::ONE)
    }

    /// Atomically decrements the value and returns the new value.
    #[inline]
    pub fn dec(&self) -> T {
        self.sub(T::ONE)
    }

    /// Atomic compare-and-swap.
    ///
    /// Replaces the value with `new` if and only if it currently equals
    /// `old`. Returns whether the swap happened; nothing changes on
    /// failure.
    #[inline]
    pub fn cas(&self, old: T, new: T) -> bool {
        T::compare_exchange(
            &self.inner,
            old,
            new,
            Ordering::AcqRel,
            Ordering::Acquire,
        )
        .is_ok()
    }

    /// Atomically replaces the value with `value` and returns the previous
    /// value.
    #[inline]
    pub fn swap(&self, value: T) -> T {
        T::swap(&self.inner, value, Ordering::AcqRel)
    }

    /// Encodes the current value as a bare JSON number.
    ///
    /// # Errors
    ///
    /// Only the error type of `serde_json` is surfaced; integers always
    /// encode.
    pub fn marshal_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.load())
    }

    /// Decodes a bare JSON number and stores it.
    ///
    /// Decoding happens before the store, so only the final store is atomic
    /// with respect to concurrent operations.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if `bytes` is not a JSON number representable
    /// in `T`. The stored value is left unchanged in that case.
    pub fn unmarshal_json(&self, bytes: &[u8]) -> Result<(), DecodeError> {
        let value: T = serde_json::from_slice(bytes).map_err(|err| {
            tracing::debug!(target_type = type_name::<T>(), error = %err, "rejected JSON payload");
            DecodeError::new(type_name::<T>(), err)
        })?;
        self.store(value);
        Ok(())
    }
}

impl<T: Scalar> Atomic for AtomicInt<T> {
    type Value = T;

    #[inline]
    fn load(&self) -> T {
        self.load()
    }

    #[inline]
    fn store(&self, value: T) {
        self.store(value);
    }

    #[inline]
    fn swap(&self, value: T) -> T {
        self.swap(value)
    }

    #[inline]
    fn cas(&self, old: T, new: T) -> bool {
        self.cas(old, new)
    }
}

impl<T: Scalar> AtomicInteger for AtomicInt<T> {
    #[inline]
    fn add(&self, delta: T) -> T {
        self.add(delta)
    }

    #[inline]
    fn sub(&self, delta: T) -> T {
        self.sub(delta)
    }

    #[inline]
    fn inc(&self) -> T {
        self.inc()
    }

    #[inline]
    fn dec(&self) -> T {
        self.dec()
    }
}

impl<T: Scalar> Default for AtomicInt<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}

impl<T: Scalar> From<T> for AtomicInt<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Scalar> fmt::Debug for AtomicInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicInt")
            .field("value", &self.load())
            .finish()
    }
}

impl<T: Scalar> fmt::Display for AtomicInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}

// The wrapped value is the entire JSON representation.

impl<T: Scalar> Serialize for AtomicInt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load().serialize(serializer)
    }
}

impl<'de, T: Scalar> Deserialize<'de> for AtomicInt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
