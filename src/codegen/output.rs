/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use std::fs::File;
use std::io::{self, Write};

use crate::codegen::error::{GenerateError, Result};
use crate::codegen::request::Destination;

/// Writes `text` to `destination`, creating or truncating a file target.
///
/// # Errors
///
/// [`GenerateError::Io`] if the file cannot be created or the write fails.
pub fn write_output(text: &str, destination: &Destination) -> Result<()> {
    let io_error = |action, source| GenerateError::Io {
        action,
        destination: destination.to_string(),
        source,
    };

    match destination {
        Destination::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())
                .and_then(|()| out.flush())
                .map_err(|err| io_error("write", err))
        }
        Destination::File(path) => {
            let mut file = File::create(path).map_err(|err| io_error("create", err))?;
            file.write_all(text.as_bytes())
                .and_then(|()| file.flush())
                .map_err(|err| io_error("write", err))
        }
    }
}
