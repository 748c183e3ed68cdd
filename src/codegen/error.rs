/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use std::io;

/// Errors produced while generating a wrapper type.
///
/// All of them are fatal to the current invocation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A required generation parameter is missing
    #[error("{0}")]
    Configuration(String),

    /// A parameter cannot be substituted into the template
    #[error("render template: {field} {value:?} is not a valid identifier: {source}")]
    Render {
        /// Which parameter was rejected
        field: &'static str,
        /// The rejected value
        value: String,
        /// Why it was rejected
        source: syn::Error,
    },

    /// The rendered source is not well-formed Rust
    #[error("reformat source: {0}")]
    Format(#[source] syn::Error),

    /// The destination could not be created or written
    #[error("{action} {destination}: {source}")]
    Io {
        /// `create` or `write`
        action: &'static str,
        /// The destination, as displayed to the user
        destination: String,
        /// The underlying I/O failure
        source: io::Error,
    },
}

/// A specialized `Result` type for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
