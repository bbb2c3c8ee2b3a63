//! Configuration and Trace error definitions.
//!
//! The predictor core itself is total: every PC maps to a valid index and tag,
//! and a table miss is an ordinary outcome. Errors only arise at the edges:
//! 1. **Configuration:** Malformed JSON or out-of-range parameters.
//! 2. **Traces:** Unreadable files or malformed load records.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or validating a [`Config`](crate::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for the config schema.
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The hit threshold must select a non-empty confidence tier.
    #[error("hit threshold {0} outside 1..=3")]
    HitThreshold(u8),

    /// Entries must record a non-zero access width.
    #[error("default access size must be non-zero")]
    ZeroAccessSize,

    /// A replay run must predict at least one load.
    #[error("max_loads must be non-zero")]
    ZeroMaxLoads,

    /// Synthetic workloads need at least one load PC.
    #[error("workload num_pcs must be non-zero")]
    ZeroWorkloadPcs,
}

/// Errors raised while reading a load trace.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The trace file could not be opened or read.
    #[error("failed to read trace {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line did not have the `<pc> <value> [size]` shape.
    #[error("line {line}: expected `<pc> <value> [size]`, found {fields} field(s)")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Number of whitespace-separated fields found.
        fields: usize,
    },

    /// A field was not a decimal or `0x`-prefixed hexadecimal number.
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// The access size does not fit in a byte.
    #[error("line {line}: access size {size} exceeds 255 bytes")]
    SizeOutOfRange {
        /// 1-based line number.
        line: usize,
        /// Parsed size.
        size: u64,
    },
}
