//! Load trace parsing.
//!
//! A trace is UTF-8 text with one resolved load per line:
//!
//! ```text
//! # pc          value        [size]
//! 0x80001000    0x80100000   8
//! 0x80001004    4096
//! ```
//!
//! Numbers are decimal or `0x`-prefixed hexadecimal. `#` starts a comment and
//! blank lines are skipped.

use std::fs;
use std::path::Path;

use crate::common::error::TraceError;

/// One resolved load, as the host would report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRecord {
    /// Program counter of the load.
    pub pc: u64,
    /// Resolved address/value.
    pub value: u64,
    /// Access width in bytes, if recorded.
    pub size: Option<u8>,
}

impl LoadRecord {
    /// Creates a record without an access width.
    pub const fn new(pc: u64, value: u64) -> Self {
        Self {
            pc,
            value,
            size: None,
        }
    }

    /// Returns the record with an access width attached.
    pub const fn with_size(self, size: u8) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
fn parse_number(token: &str, line: usize) -> Result<u64, TraceError> {
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => token.replace('_', "").parse::<u64>(),
    };
    parsed.map_err(|_| TraceError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Parses one trace line. Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns [`TraceError::Malformed`] for a wrong field count,
/// [`TraceError::InvalidNumber`] for an unparsable field and
/// [`TraceError::SizeOutOfRange`] for a size above 255.
pub fn parse_line(text: &str, line: usize) -> Result<Option<LoadRecord>, TraceError> {
    let content = text.split_once('#').map_or(text, |(before, _)| before);
    let fields: Vec<&str> = content.split_whitespace().collect();

    match fields.as_slice() {
        [] => Ok(None),
        [pc, value] => Ok(Some(LoadRecord::new(
            parse_number(pc, line)?,
            parse_number(value, line)?,
        ))),
        [pc, value, size] => {
            let size = parse_number(size, line)?;
            let size = u8::try_from(size).map_err(|_| TraceError::SizeOutOfRange { line, size })?;
            Ok(Some(
                LoadRecord::new(parse_number(pc, line)?, parse_number(value, line)?)
                    .with_size(size),
            ))
        }
        other => Err(TraceError::Malformed {
            line,
            fields: other.len(),
        }),
    }
}

/// Parses a whole trace held in memory.
///
/// # Errors
///
/// Returns the first error found, tagged with its 1-based line number.
pub fn parse_trace(text: &str) -> Result<Vec<LoadRecord>, TraceError> {
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(record) = parse_line(line, i + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Reads and parses a trace file.
///
/// # Errors
///
/// Returns [`TraceError::Io`] when the file cannot be read, otherwise the
/// errors of [`parse_trace`].
pub fn load_trace(path: &Path) -> Result<Vec<LoadRecord>, TraceError> {
    let text = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trace(&text)
}
