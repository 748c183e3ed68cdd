/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-atomic-int
//!
//! Type-safe atomic wrappers over fixed-width integers and error values,
//! with a generator that emits new wrapper types from a single template.
//!
//! ## Design Goals
//!
//! - **Uniformity**: every wrapper exposes the same operations with the same
//!   semantics: `load`, `store`, `add`, `sub`, `inc`, `dec`, `cas`, `swap`,
//!   and JSON encoding as a bare scalar
//! - **Correct wraparound**: `sub` is an atomic add of the two's-complement
//!   negation of its argument, modular for every width
//! - **Lock-free**: all state lives in a single atomic cell
//!
//! ## Features
//!
//! - Integer atomic types: `AtomicI8`, `AtomicU8`, `AtomicI16`, `AtomicU16`,
//!   `AtomicI32`, `AtomicU32`, `AtomicI64`, `AtomicU64`, `AtomicIsize`,
//!   `AtomicUsize`, all aliases of the generic `AtomicInt<T>`
//! - Error atomic type: `AtomicError`
//! - Source generator (`codegen` feature): `codegen::generate` and the
//!   `gen-atomicint` binary
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_int::AtomicI32;
//!
//! let counter = AtomicI32::new(0);
//! assert_eq!(counter.inc(), 1);
//! assert_eq!(counter.sub(3), -2);
//! assert!(counter.cas(-2, 40));
//! assert_eq!(counter.swap(7), 40);
//! assert_eq!(counter.marshal_json().unwrap(), b"7");
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
#[cfg(feature = "codegen")]
pub mod codegen;
pub mod error;

pub use atomic::{
    Atomic,
    AtomicError,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicInt,
    AtomicInteger,
    AtomicIsize,
    AtomicU16,
    AtomicU32,
    AtomicU64,
    AtomicU8,
    AtomicUsize,
    Scalar,
    SharedError,
    Signed,
    Signedness,
    Unsigned,
};
pub use error::DecodeError;
