/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Errors
//!
//! Error returned by the wrappers' JSON decoding.
//!
//! # Author
//!
//! Haixing Hu

/// A JSON payload could not be decoded into a wrapper's value type.
///
/// The wrapper's stored value is left untouched when this is returned.
#[derive(Debug, thiserror::Error)]
#[error("cannot decode {type_name} from JSON: {source}")]
pub struct DecodeError {
    type_name: &'static str,
    source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new(type_name: &'static str, source: serde_json::Error) -> Self {
        Self { type_name, source }
    }

    /// The name of the scalar type that was being decoded.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the payload was not valid JSON at all, as opposed to valid
    /// JSON of the wrong shape or range.
    pub fn is_syntax(&self) -> bool {
        self.source.is_syntax() || self.source.is_eof()
    }
}
