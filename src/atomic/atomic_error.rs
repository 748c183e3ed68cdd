/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Error
//!
//! Provides an atomic cell for error values. Errors have no native atomic
//! representation, so each stored error is boxed and the box pointer is
//! swapped atomically. Replaced boxes are reclaimed through
//! `crossbeam::epoch`.
//!
//! # Author
//!
//! Haixing Hu

use std::error::Error;
use std::fmt;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crossbeam::epoch::{self, Atomic, Owned};

/// A shareable, thread-safe error value.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Carrier box for a stored error.
///
/// A stored `None` is still a box, so a null pointer is the only way to
/// represent a cell that has never been written.
struct StoredError(Option<SharedError>);

/// Atomic cell holding an optional error.
///
/// The cell has two observable states: unset (the initial state when
/// constructed without an error) and set. `store` is the only transition and
/// there is no way back to unset. `load` returns `None` both for an unset
/// cell and for a cell whose last store was `None`.
///
/// # Allocation
///
/// Every call to [`store`](Self::store) allocates a new box, including
/// `store(None)`. Callers on allocation-sensitive paths should keep this
/// in mind.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_int::{AtomicError, SharedError};
/// use std::io;
/// use std::sync::Arc;
///
/// let last_error = AtomicError::default();
/// assert!(last_error.load().is_none());
///
/// let err: SharedError = Arc::new(io::Error::new(io::ErrorKind::Other, "disk full"));
/// last_error.store(Some(err.clone()));
/// assert!(Arc::ptr_eq(&last_error.load().unwrap(), &err));
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicError {
    inner: Atomic<StoredError>,
}

impl AtomicError {
    /// Creates a new cell.
    ///
    /// With `None` the cell starts unset and nothing is allocated; otherwise
    /// the error is boxed and stored immediately.
    pub fn new(initial: Option<SharedError>) -> Self {
        let cell = Self {
            inner: Atomic::null(),
        };
        if initial.is_some() {
            cell.store(initial);
        }
        cell
    }

    /// Atomically loads the stored error.
    ///
    /// Returns `None` if the cell was never written or the last stored value
    /// was `None`.
    pub fn load(&self) -> Option<SharedError> {
        let guard = &epoch::pin();
        let current = self.inner.load(Ordering::Acquire, guard);
        // SAFETY: boxes are only freed through `defer_destroy` after being
        // unlinked, so a pointer read under a pinned guard stays valid.
        unsafe { current.as_ref() }.and_then(|stored| stored.0.clone())
    }

    /// Atomically stores `value`.
    ///
    /// NOTE: this allocates a new box on every call.
    pub fn store(&self, value: Option<SharedError>) {
        let guard = &epoch::pin();
        let previous = self
            .inner
            .swap(Owned::new(StoredError(value)), Ordering::AcqRel, guard);
        if !previous.is_null() {
            // SAFETY: `previous` is no longer reachable from the cell and no
            // new reader can obtain it; readers pinned earlier keep it alive
            // until their guards drop.
            unsafe { guard.defer_destroy(previous) };
        }
    }
}

impl Default for AtomicError {
    fn default() -> Self {
        Self::new(None)
    }
}

impl From<SharedError> for AtomicError {
    fn from(value: SharedError) -> Self {
        Self::new(Some(value))
    }
}

impl fmt::Debug for AtomicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicError")
            .field("value", &self.load())
            .finish()
    }
}

impl Drop for AtomicError {
    fn drop(&mut self) {
        // SAFETY: `&mut self` guarantees no concurrent access to the cell.
        unsafe {
            let guard = epoch::unprotected();
            let current = self.inner.load(Ordering::Relaxed, guard);
            if !current.is_null() {
                drop(current.into_owned());
            }
        }
    }
}
