/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use std::any::type_name;
use std::fmt;
use std::path::PathBuf;

use crate::atomic::{Scalar, Signedness};
use crate::codegen::error::{GenerateError, Result};

/// Where generated source is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    /// The process's standard output.
    #[default]
    Stdout,
    /// A file, created or truncated on write.
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("standard output"),
            Destination::File(path) => write!(f, "{:?}", path.display().to_string()),
        }
    }
}

/// Parameters for generating one wrapper type.
///
/// Constructed once per invocation and consumed by
/// [`generate`](crate::codegen::generate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Name of the emitted type (e.g. `Int32`).
    pub type_name: String,
    /// Name of the wrapped integer type (e.g. `i32`).
    pub wrapped_type: String,
    /// Selects the unsigned subtraction strategy.
    pub unsigned: bool,
    /// Output destination.
    pub destination: Destination,
}

impl GenerationRequest {
    /// Creates a request that writes to standard output.
    pub fn new(
        type_name: impl Into<String>,
        wrapped_type: impl Into<String>,
        unsigned: bool,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            wrapped_type: wrapped_type.into(),
            unsigned,
            destination: Destination::Stdout,
        }
    }

    /// Creates a request for one of the library's scalar types, taking the
    /// wrapped type name and signedness from `T`.
    ///
    /// ```rust
    /// use prism3_atomic_int::codegen::GenerationRequest;
    ///
    /// let request = GenerationRequest::for_scalar::<u16>("Uint16");
    /// assert_eq!(request.wrapped_type, "u16");
    /// assert!(request.unsigned);
    /// ```
    pub fn for_scalar<T: Scalar>(name: impl Into<String>) -> Self {
        Self::new(name, type_name::<T>(), <T::Sign as Signedness>::UNSIGNED)
    }

    /// Returns the request with its output redirected.
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Checks that both names are present.
    ///
    /// Nothing else is checked here: whether the wrapped type really has a
    /// matching std atomic only shows when the output is compiled.
    ///
    /// # Errors
    ///
    /// [`GenerateError::Configuration`] if either name is empty.
    pub fn validate(&self) -> Result<()> {
        if self.type_name.is_empty() || self.wrapped_type.is_empty() {
            return Err(GenerateError::Configuration(
                "flags --name and --wrapped are required".to_owned(),
            ));
        }
        Ok(())
    }
}
