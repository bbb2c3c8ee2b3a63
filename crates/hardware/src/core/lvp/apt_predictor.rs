//! APT Load Value Predictor.
//!
//! The engine owns the path history register, the Address Prediction Table and
//! the prediction statistics. A host drives it once per load:
//!
//! 1. `get_prediction(pc)` at fetch: a hit returns the stored value and counts
//!    one issued prediction; a miss returns `None`.
//! 2. `update_stats(predicted, actual, pc)` when a prediction is evaluated.
//! 3. `train_apt(predicted, actual, pc)` at resolution, hit or miss.
//!
//! Steps 2 and 3 may run in either order; an issued prediction lands in
//! `total` and `num_correct` at most once each.
//! 4. `update_path_history(pc)` when the load retires.
//!
//! Prediction and training never touch the path history, so a load trained
//! right after it was predicted lands in the slot it was predicted from.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `get_prediction()`: O(1)
//!   - `train_apt()`: O(1)
//! - **Space Complexity:** O(N) with N = 1024 entries
//! - **Hardware Cost:** Low - single table read, tag compare, 2-bit counter update
//! - **Best Case:** Loads that return the same value on every visit of a path
//! - **Worst Case:** Strided or random values (every outcome reallocates)

use tracing::{debug, trace};

use crate::common::constants::{APT_SIZE, INITIAL_CONFIDENCE};
use crate::config::PredictorConfig;
use crate::stats::PredictionStats;

use super::LoadValuePredictor;
use super::apt::{self, Apt, AptEntry};
use super::confidence::Confidence;
use super::path_history::PathHistory;

/// Equality check between a predicted and a resolved value.
///
/// The PC is accepted for symmetry with the surrounding calls; correctness
/// does not depend on it.
#[inline(always)]
pub const fn is_correct_pred(predicted: u64, actual: u64, _pc: u64) -> bool {
    predicted == actual
}

/// Bookkeeping for the single in-flight prediction.
///
/// A prediction is counted in `total` when issued. Each of `update_stats` and
/// training consumes its half once, and `num_correct` is credited at most
/// once, whichever of the two runs first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingPrediction {
    pc: u64,
    evaluated: bool,
    trained: bool,
    credited: bool,
}

impl PendingPrediction {
    const fn new(pc: u64) -> Self {
        Self {
            pc,
            evaluated: false,
            trained: false,
            credited: false,
        }
    }

    const fn is_settled(&self) -> bool {
        self.evaluated && self.trained
    }
}

/// Address Prediction Table engine.
#[derive(Clone, Debug)]
pub struct AptPredictor {
    /// Load path history register.
    history: PathHistory,
    /// Direct-mapped prediction table.
    table: Apt,
    /// Accumulated statistics.
    stats: PredictionStats,
    /// Lowest confidence that yields a hit.
    hit_threshold: Confidence,
    /// Access width recorded on allocation when none is supplied.
    default_access_size: u8,
    /// In-flight prediction already counted in `stats.total`.
    pending: Option<PendingPrediction>,
}

impl AptPredictor {
    /// Creates an engine with an empty table, zero history and zero stats.
    pub fn new(config: &PredictorConfig) -> Self {
        Self {
            history: PathHistory::new(),
            table: Apt::new(),
            stats: PredictionStats::default(),
            hit_threshold: Confidence::new(config.hit_threshold.max(INITIAL_CONFIDENCE)),
            default_access_size: config.default_access_size,
            pending: None,
        }
    }

    /// Folds the PC of an observed load into the path history.
    ///
    /// Call exactly once per load.
    #[inline(always)]
    pub fn update_path_history(&mut self, pc: u64) {
        self.history.update(pc);
        trace!(pc, history = self.history.value(), "path history");
    }

    /// Current path history register.
    pub const fn path_history(&self) -> PathHistory {
        self.history
    }

    /// Table index for `pc` under the current path history, in `[0, 1023]`.
    #[inline(always)]
    pub const fn calc_index(&self, pc: u64) -> usize {
        apt::index(pc, self.history.value())
    }

    /// 14-bit verification tag for `pc`.
    #[inline(always)]
    pub const fn calc_tag(&self, pc: u64) -> u16 {
        apt::tag(pc)
    }

    /// True when the entry at `index` belongs to `pc` and is confident enough
    /// to predict.
    pub fn query_hit_miss(&self, index: usize, pc: u64) -> bool {
        let entry = self.table.get_entry(index);
        entry.tag == self.calc_tag(pc) && entry.confidence >= self.hit_threshold
    }

    /// Returns a copy of the entry at `index` (masked into the table).
    pub fn get_entry(&self, index: usize) -> AptEntry {
        self.table.get_entry(index)
    }

    /// Overwrites the entry at `index`. Only the training path writes entries.
    fn set_entry(&mut self, index: usize, entry: AptEntry) {
        self.table.set_entry(index, entry);
    }

    /// Builds a fresh entry for `pc` predicting `address` at the lowest
    /// non-empty confidence.
    pub const fn allocate_new(&self, address: u64, pc: u64) -> AptEntry {
        AptEntry {
            tag: self.calc_tag(pc),
            address,
            confidence: Confidence::LOW,
            size: self.default_access_size,
        }
    }

    /// Looks up a prediction for the load at `pc`.
    ///
    /// A hit counts one issued prediction in `stats.total`; a miss leaves the
    /// prediction counters alone. The table is never modified.
    pub fn get_prediction(&mut self, pc: u64) -> Option<u64> {
        let index = self.calc_index(pc);
        self.stats.lookups += 1;

        if !self.query_hit_miss(index, pc) {
            self.stats.misses += 1;
            self.pending = None;
            trace!(pc, index, "apt miss");
            return None;
        }

        let entry = self.table.get_entry(index);
        self.stats.record_issue(entry.confidence);
        self.pending = Some(PendingPrediction::new(pc));
        trace!(
            pc,
            index,
            value = entry.address,
            confidence = entry.confidence.get(),
            "apt hit"
        );
        Some(entry.address)
    }

    /// Returns the address stored in `pc`'s slot, ignoring tag and confidence.
    ///
    /// Has no effect on statistics.
    pub fn get_prediction_raw(&self, pc: u64) -> u64 {
        self.table.get_entry(self.calc_index(pc)).address
    }

    /// Pending prediction for `pc`, if one is in flight.
    fn pending_for(&mut self, pc: u64) -> Option<&mut PendingPrediction> {
        self.pending.as_mut().filter(|p| p.pc == pc)
    }

    /// Marks the pending prediction for `pc` as trained, crediting
    /// `num_correct` on reinforcement unless evaluation already did.
    fn record_training(&mut self, pc: u64, reinforced: bool) {
        let credit = match self.pending_for(pc) {
            Some(p) if !p.trained => {
                p.trained = true;
                let credit = reinforced && !p.credited;
                p.credited |= credit;
                credit
            }
            _ => false,
        };
        if credit {
            self.stats.num_correct += 1;
        }
        self.settle_pending();
    }

    /// Drops the pending prediction once both evaluation and training saw it.
    fn settle_pending(&mut self) {
        if self.pending.is_some_and(|p| p.is_settled()) {
            self.pending = None;
        }
    }

    /// Records the evaluation of a prediction for `pc`.
    ///
    /// A prediction already counted by `get_prediction` is not counted twice;
    /// any other evaluation adds one to `total`. `num_correct` grows when the
    /// values match, unless training already credited this prediction.
    pub fn update_stats(&mut self, predicted: u64, actual: u64, pc: u64) {
        let correct = is_correct_pred(predicted, actual, pc);
        let (counted, credit) = match self.pending_for(pc) {
            Some(p) if !p.evaluated => {
                p.evaluated = true;
                let credit = correct && !p.credited;
                p.credited |= credit;
                (true, credit)
            }
            _ => (false, correct),
        };
        self.stats.record_evaluation(counted, credit);
        self.settle_pending();
    }

    /// Trains the table with the resolved value of the load at `pc`, recording
    /// the configured default access width on allocation.
    pub fn train_apt(&mut self, predicted: u64, actual: u64, pc: u64) {
        self.train_apt_sized(predicted, actual, pc, self.default_access_size);
    }

    /// Trains the table with the resolved value and access width of a load.
    ///
    /// - Matching tag, correct: confidence rises one step (saturating).
    /// - Matching tag, incorrect: confidence falls one step; at the floor the
    ///   entry is evicted and reallocated for `actual`.
    /// - Empty slot or foreign tag: a new entry for `pc` overwrites the slot.
    pub fn train_apt_sized(&mut self, predicted: u64, actual: u64, pc: u64, size: u8) {
        let index = self.calc_index(pc);
        let tag = self.calc_tag(pc);
        let entry = self.table.get_entry(index);
        let owned = entry.tag == tag && !entry.is_empty();
        let correct = is_correct_pred(predicted, actual, pc);
        self.record_training(pc, owned && correct);

        if owned {
            if correct {
                self.set_entry(
                    index,
                    AptEntry {
                        confidence: entry.confidence.increment(),
                        ..entry
                    },
                );
                self.stats.reinforcements += 1;
                return;
            }

            let confidence = entry.confidence.decrement();
            if confidence.is_empty() {
                debug!(
                    pc,
                    index,
                    old = entry.address,
                    new = actual,
                    "apt evict at confidence floor"
                );
                self.stats.reallocations += 1;
                self.stats.allocations += 1;
                let fresh = self.allocate_new(actual, pc).with_size(size);
                self.set_entry(index, fresh);
            } else {
                self.set_entry(index, AptEntry { confidence, ..entry });
            }
            return;
        }

        if !entry.is_empty() {
            debug!(
                pc,
                index,
                old_tag = entry.tag,
                new_tag = tag,
                "apt alias overwrite"
            );
            self.stats.reallocations += 1;
        }
        self.stats.allocations += 1;
        let fresh = self.allocate_new(actual, pc).with_size(size);
        self.set_entry(index, fresh);
    }

    /// Returns the engine to its freshly constructed state: empty table, zero
    /// history, zero statistics and no prediction in flight.
    pub fn reset(&mut self) {
        self.table.clear();
        self.history.reset();
        self.stats = PredictionStats::default();
        self.pending = None;
    }

    /// Accumulated statistics.
    pub const fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    /// Number of table slots holding a usable entry.
    pub fn occupancy(&self) -> usize {
        self.table.occupancy()
    }

    /// Number of table entries at each confidence level.
    pub fn confidence_histogram(&self) -> [usize; 4] {
        self.table.confidence_histogram()
    }

    /// Number of table slots.
    pub const fn table_size(&self) -> usize {
        APT_SIZE
    }

    /// Prints every statistics section to stdout.
    pub fn print_stats(&self) {
        self.stats.print();
    }

    /// Prints the statistics the first time `limit` predictions have been counted.
    pub fn print_stats_with_limit(&mut self, limit: u64) -> bool {
        self.stats.print_with_limit(limit)
    }
}

impl Default for AptPredictor {
    fn default() -> Self {
        Self::new(&PredictorConfig::default())
    }
}

impl LoadValuePredictor for AptPredictor {
    #[inline(always)]
    fn predict(&mut self, pc: u64) -> Option<u64> {
        self.get_prediction(pc)
    }

    #[inline(always)]
    fn predict_raw(&self, pc: u64) -> u64 {
        self.get_prediction_raw(pc)
    }

    #[inline(always)]
    fn update_stats(&mut self, predicted: u64, actual: u64, pc: u64) {
        Self::update_stats(self, predicted, actual, pc);
    }

    #[inline(always)]
    fn train(&mut self, predicted: u64, actual: u64, pc: u64, size: Option<u8>) {
        let size = size.unwrap_or(self.default_access_size);
        self.train_apt_sized(predicted, actual, pc, size);
    }

    #[inline(always)]
    fn update_path_history(&mut self, pc: u64) {
        Self::update_path_history(self, pc);
    }

    fn print_stats_with_limit(&mut self, limit: u64) -> bool {
        Self::print_stats_with_limit(self, limit)
    }

    fn stats(&self) -> &PredictionStats {
        &self.stats
    }
}
