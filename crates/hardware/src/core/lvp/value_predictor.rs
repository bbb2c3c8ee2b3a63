//! Load Value Predictor Interface.
//!
//! This module defines the `LoadValuePredictor` trait a host pipeline drives
//! once per load: predict at fetch, evaluate and train at resolution, then
//! retire the load into the path history.

use crate::stats::PredictionStats;

/// Trait for load value prediction algorithms.
pub trait LoadValuePredictor {
    /// Predicts the value a load will access.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the load instruction
    ///
    /// # Returns
    ///
    /// `Some(value)` when a usable entry exists, `None` on a miss.
    fn predict(&mut self, pc: u64) -> Option<u64>;

    /// Returns whatever value is stored in the load's slot, without checking
    /// tag or confidence and without touching statistics.
    fn predict_raw(&self, pc: u64) -> u64;

    /// Records the evaluation of a prediction against its resolved value.
    ///
    /// # Arguments
    ///
    /// * `predicted` - Value that was predicted
    /// * `actual` - Value the load resolved to
    /// * `pc` - Program counter of the load instruction
    fn update_stats(&mut self, predicted: u64, actual: u64, pc: u64);

    /// Trains the predictor with the resolved value of a load.
    ///
    /// # Arguments
    ///
    /// * `predicted` - Value the predictor produced (or its raw slot value on a miss)
    /// * `actual` - Value the load resolved to
    /// * `pc` - Program counter of the load instruction
    /// * `size` - Access width in bytes, when the host knows it
    fn train(&mut self, predicted: u64, actual: u64, pc: u64, size: Option<u8>);

    /// Folds a retired load's PC into the path history.
    fn update_path_history(&mut self, pc: u64);

    /// Prints the statistics once the issued prediction count reaches `limit`.
    ///
    /// Returns true only on the call that printed.
    fn print_stats_with_limit(&mut self, limit: u64) -> bool;

    /// Accumulated prediction statistics.
    fn stats(&self) -> &PredictionStats;
}
