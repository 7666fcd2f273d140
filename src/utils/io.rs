//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Read a UTF-8 text file with standardized error handling.
///
/// Missing files and permission failures map to their own error codes;
/// bytes that are not valid UTF-8 surface as `file.invalid_encoding`.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| map_io_error(e, path, operation))?;

    String::from_utf8(bytes).map_err(|e| {
        Error::file_invalid_encoding(path.display().to_string(), e.utf8_error().valid_up_to())
    })
}

/// Write content to file with standardized error handling.
///
/// Plain overwrite: truncates and rewrites `path` in place.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| map_io_error(e, path, operation))
}

fn map_io_error(err: io::Error, path: &Path, operation: &str) -> Error {
    let display = path.display().to_string();
    match err.kind() {
        io::ErrorKind::NotFound => Error::file_not_found(display),
        io::ErrorKind::PermissionDenied => Error::file_permission_denied(display, err.to_string()),
        _ => Error::internal_io(err.to_string(), Some(format!("{} {}", operation, display))),
    }
}
