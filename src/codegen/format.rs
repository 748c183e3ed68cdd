/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use crate::codegen::error::{GenerateError, Result};

/// Marker line placed at the top of every generated file.
///
/// The output belongs to whoever runs the generator, so no license banner is
/// stamped on it.
pub const HEADER: &str = "// @generated by gen-atomicint. Do not edit by hand.\n\n";

/// Canonicalizes the layout of rendered source.
///
/// The source is parsed as a whole Rust file and pretty printed, then
/// prefixed with [`HEADER`].
///
/// # Errors
///
/// [`GenerateError::Format`] if `source` is not a well-formed Rust file.
/// For output of [`render`](crate::codegen::render) this means the template
/// itself is broken.
pub fn format_source(source: &str) -> Result<String> {
    let file = syn::parse_file(source).map_err(GenerateError::Format)?;
    let body = prettyplease::unparse(&file);

    let mut formatted = String::with_capacity(HEADER.len() + body.len());
    formatted.push_str(HEADER);
    formatted.push_str(&body);
    Ok(formatted)
}
