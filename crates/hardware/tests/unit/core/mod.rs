//! Predictor core tests.

/// Address Prediction Table engine tests.
pub mod lvp;
