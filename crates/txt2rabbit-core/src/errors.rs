use std::fmt;

use thiserror::Error;

/// Diagnostic for one skipped input line. The parser collects these instead
/// of writing to stderr; the caller decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub line_number: usize,
    pub raw: String,
    pub message: String,
}

impl ParseWarning {
    pub fn new(line_number: usize, raw: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line_number,
            raw: raw.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipping line {} ({}): {:?}",
            self.line_number, self.message, self.raw
        )
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("time must be > 0, found {time_min} in {label}")]
    NonPositiveTime { label: String, time_min: f64 },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP operation failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to replace destination file: {0}")]
    Persist(std::io::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON operation failed: {0}")]
    Json(#[from] serde_json::Error),
}
