//! Core predictor implementation.
//!
//! This module contains the load value prediction unit. The unit is evaluated
//! once per load by the host pipeline and owns all of its state.

/// Load value prediction unit (Address Prediction Table engine).
pub mod lvp;

pub use self::lvp::AptPredictor;
