//! CLI response formatting and output.
//!
//! Provides the JSON envelope, printing, and exit code mapping.

use reffix::error::Hint;
use reffix::{Error, ErrorCode, Result};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn write_line(mut handle: impl Write, line: &str, context: &str) -> Result<()> {
    if let Err(e) = writeln!(handle, "{}", line) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(e.to_string(), Some(context.to_string())));
    }
    Ok(())
}

/// Print a plain line on stdout.
pub fn print_line(line: &str) -> Result<()> {
    write_line(io::stdout().lock(), line, "write stdout")
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    let payload = CliResponse::success(data).to_json()?;
    print_line(&payload)
}

/// Errors go to stderr so stdout only ever carries the success output.
pub fn print_error(err: &Error) -> Result<()> {
    let payload = CliResponse::<()>::from_error(err).to_json()?;
    write_line(io::stderr().lock(), &payload, "write stderr")
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::FileNotFound => 4,

        ErrorCode::FilePermissionDenied
        | ErrorCode::FileInvalidEncoding
        | ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError => 1,
    }
}
