//! Load value prediction unit (LVP).
//!
//! This module contains the Address Prediction Table engine and the pieces it
//! is built from: the load path history register, the direct-mapped table with
//! its index/tag hashing, and the saturating confidence counters.

pub use self::apt::AptEntry;
pub use self::apt_predictor::{AptPredictor, is_correct_pred};
pub use self::confidence::{Confidence, ConfidenceTier, increment_confidence};
pub use self::path_history::PathHistory;
pub use self::value_predictor::LoadValuePredictor;

/// Direct-mapped Address Prediction Table storage and hashing.
pub mod apt;

/// The APT engine: prediction, training, and stats coupling.
pub mod apt_predictor;

/// Saturating confidence counters and their trust tiers.
pub mod confidence;

/// Rolling hash of recently observed load PCs.
pub mod path_history;

/// Load value predictor trait.
pub mod value_predictor;
