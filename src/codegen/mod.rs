/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Wrapper Generator
//!
//! Emits the Rust source of a standalone atomic wrapper around a named
//! integer type. Generation is a single synchronous pass:
//!
//! 1. [`GenerationRequest::validate`] checks that both names are present.
//! 2. [`render`] substitutes the request into the wrapper template.
//! 3. [`format_source`] parses and pretty prints the result.
//! 4. [`write_output`] writes it to standard output or a file.
//!
//! Steps 1-3 run before the destination is opened, so a failed run never
//! creates or truncates a file.
//!
//! The generated type has the same operations and semantics as
//! [`AtomicInt<T>`](crate::AtomicInt) but is monomorphic and depends only on
//! `std`, `serde` and `serde_json`.
//!
//! # Example
//!
//! ```rust
//! use prism3_atomic_int::codegen::{generate, GenerationRequest};
//!
//! let source = generate(&GenerationRequest::new("Uint32", "u32", true)).unwrap();
//! assert!(source.contains("pub struct Uint32"));
//! ```
//!
//! # Author
//!
//! Haixing Hu

mod error;
mod format;
mod output;
mod request;
mod template;

pub use error::{GenerateError, Result};
pub use format::{format_source, HEADER};
pub use output::write_output;
pub use request::{Destination, GenerationRequest};
pub use template::render;

/// Validates, renders and formats `request`, returning the final source.
///
/// # Errors
///
/// [`GenerateError::Configuration`], [`GenerateError::Render`] or
/// [`GenerateError::Format`], from the corresponding stage.
pub fn generate(request: &GenerationRequest) -> Result<String> {
    request.validate()?;
    tracing::debug!(
        type_name = %request.type_name,
        wrapped = %request.wrapped_type,
        unsigned = request.unsigned,
        "rendering wrapper template"
    );

    let rendered = render(request)?;
    tracing::trace!(bytes = rendered.len(), "rendered template");

    let formatted = format_source(&rendered)?;
    tracing::debug!(bytes = formatted.len(), "formatted generated source");
    Ok(formatted)
}

/// Generates the source for `request` and writes it to its destination.
///
/// # Errors
///
/// Any error from [`generate`] or [`write_output`]; nothing is written if
/// generation fails.
pub fn run(request: &GenerationRequest) -> Result<()> {
    let source = generate(request)?;
    write_output(&source, &request.destination)?;
    tracing::info!(
        type_name = %request.type_name,
        destination = %request.destination,
        "wrote generated wrapper"
    );
    Ok(())
}
