//! Replay driver: feeds resolved loads through a predictor.
//!
//! Each load goes through the same protocol a pipeline would follow:
//! predict at fetch, evaluate the prediction (hits only), train with the
//! resolved value, then retire the PC into the path history. On a miss the
//! value currently stored in the load's slot is passed to training as the
//! "predicted" value, so an entry below the hit threshold is still judged
//! against what it holds.

use tracing::{debug, info};

use crate::config::GeneralConfig;
use crate::core::lvp::LoadValuePredictor;

use super::trace::LoadRecord;

/// Outcome of one replayed load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadEvent {
    /// Program counter of the load.
    pub pc: u64,
    /// Value predicted at fetch, if the table hit.
    pub predicted: Option<u64>,
    /// Resolved value.
    pub actual: u64,
    /// True when this load triggered the one-shot statistics report.
    pub reported: bool,
}

impl LoadEvent {
    /// True when a prediction was issued and matched.
    pub fn correct(&self) -> bool {
        self.predicted == Some(self.actual)
    }
}

/// Totals for one call to [`LoadDriver::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Loads replayed.
    pub loads: u64,
    /// Loads for which a prediction was issued.
    pub predictions: u64,
    /// Issued predictions that matched.
    pub correct: u64,
    /// True when the run stopped because the load budget was exhausted.
    pub limit_reached: bool,
    /// True when the statistics report was printed during the run.
    pub report_printed: bool,
}

/// Drives a [`LoadValuePredictor`] through a stream of loads.
#[derive(Debug)]
pub struct LoadDriver<P> {
    predictor: P,
    max_loads: u64,
    trace_loads: bool,
    report_limit: Option<u64>,
    loads_seen: u64,
}

impl<P: LoadValuePredictor> LoadDriver<P> {
    /// Creates a driver with the load budget and logging from `config`.
    pub const fn new(predictor: P, config: &GeneralConfig) -> Self {
        Self {
            predictor,
            max_loads: config.max_loads,
            trace_loads: config.trace_loads,
            report_limit: None,
            loads_seen: 0,
        }
    }

    /// Prints the predictor's statistics once `limit` predictions were issued.
    #[must_use]
    pub fn with_report_limit(mut self, limit: u64) -> Self {
        self.report_limit = Some(limit);
        self
    }

    /// Replays one load.
    pub fn step(&mut self, record: &LoadRecord) -> LoadEvent {
        let predicted = self.predictor.predict(record.pc);
        let trained_with = match predicted {
            Some(value) => {
                self.predictor.update_stats(value, record.value, record.pc);
                value
            }
            None => self.predictor.predict_raw(record.pc),
        };
        self.predictor
            .train(trained_with, record.value, record.pc, record.size);
        self.predictor.update_path_history(record.pc);
        self.loads_seen += 1;

        let reported = self
            .report_limit
            .is_some_and(|limit| self.predictor.print_stats_with_limit(limit));

        let event = LoadEvent {
            pc: record.pc,
            predicted,
            actual: record.value,
            reported,
        };
        if self.trace_loads {
            info!(
                load = self.loads_seen,
                pc = record.pc,
                predicted = ?event.predicted,
                actual = record.value,
                correct = event.correct(),
                "load"
            );
        }
        event
    }

    /// Replays loads until the stream ends or the load budget is spent.
    pub fn run<I>(&mut self, loads: I) -> RunSummary
    where
        I: IntoIterator<Item = LoadRecord>,
    {
        let mut summary = RunSummary::default();
        for record in loads.into_iter().take(self.remaining() as usize) {
            let event = self.step(&record);
            summary.loads += 1;
            if event.predicted.is_some() {
                summary.predictions += 1;
            }
            if event.correct() {
                summary.correct += 1;
            }
            summary.report_printed |= event.reported;
        }

        summary.limit_reached = self.remaining() == 0;
        if summary.limit_reached {
            info!(max_loads = self.max_loads, "load limit reached");
        } else {
            debug!(loads = summary.loads, "load stream exhausted");
        }
        summary
    }

    /// Loads left before the budget is spent.
    pub const fn remaining(&self) -> u64 {
        self.max_loads.saturating_sub(self.loads_seen)
    }

    /// Loads replayed so far.
    pub const fn loads_seen(&self) -> u64 {
        self.loads_seen
    }

    /// The driven predictor.
    pub const fn predictor(&self) -> &P {
        &self.predictor
    }

    /// Consumes the driver, returning the predictor.
    pub fn into_predictor(self) -> P {
        self.predictor
    }
}
