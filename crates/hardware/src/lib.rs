//! Load value predictor library.
//!
//! This crate models a path-history indexed Address Prediction Table (APT) with the following:
//! 1. **Core:** The APT engine (path history, index/tag hashing, direct-mapped table,
//!    confidence state machine, prediction and training protocol).
//! 2. **Configuration:** JSON-driven run and predictor parameters.
//! 3. **Simulation:** Trace parsing, synthetic load streams, and a replay driver.
//! 4. **Statistics:** Accuracy, coverage, and confidence-weighted reporting.

/// Common constants and error types.
pub mod common;
/// Run and predictor configuration (defaults, validation, JSON loading).
pub mod config;
/// Predictor core (APT engine and its components).
pub mod core;
/// Trace loading, synthetic workloads, and the replay driver.
pub mod sim;
/// Prediction statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The APT engine; construct with `AptPredictor::new`.
pub use crate::core::lvp::AptPredictor;
/// Predictor interface consumed by hosts and the replay driver.
pub use crate::core::lvp::LoadValuePredictor;
/// Replay driver feeding a load stream through a predictor.
pub use crate::sim::LoadDriver;
