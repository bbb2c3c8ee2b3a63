//! Common utilities and types used throughout the load value predictor.
//!
//! This module provides the building blocks shared across all components. It includes:
//! 1. **Constants:** Table geometry, tag and history widths, confidence bounds.
//! 2. **Error Handling:** Configuration and trace error types.

/// Fixed predictor parameters.
pub mod constants;

/// Error types for configuration and trace loading.
pub mod error;

pub use constants::{APT_SIZE, NUM_LOADS_TO_PREDICT, TAG_BIT_LENGTH};
pub use error::{ConfigError, TraceError};
