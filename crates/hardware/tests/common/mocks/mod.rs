//! Mock components.

/// Mock load value predictor.
pub mod predictor;
