//! Prediction statistics collection and reporting.
//!
//! This module tracks the outcome of every load seen by the predictor. It provides:
//! 1. **Accuracy:** Predictions issued (`total`) and predictions that matched (`num_correct`).
//! 2. **Coverage:** Table lookups versus misses.
//! 3. **Table activity:** Allocations, reallocations (evictions), and reinforcements.
//! 4. **Confidence:** Hits per confidence level and the trust-weighted hit figure.
//!
//! Every counter is monotonically non-decreasing; a fresh engine starts from zero.

use std::fmt;
use std::time::Instant;

use crate::core::lvp::confidence::Confidence;

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"table"`, `"confidence"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "table", "confidence"];

/// Load value prediction statistics.
#[derive(Clone, Debug)]
pub struct PredictionStats {
    start_time: Instant,
    /// Predictions issued (table hits) plus externally evaluated predictions.
    pub total: u64,
    /// Issued predictions whose value matched the resolved load.
    pub num_correct: u64,

    /// Table lookups performed by `predict`.
    pub lookups: u64,
    /// Lookups that found no usable entry.
    pub misses: u64,

    /// New entries written into the table.
    pub allocations: u64,
    /// Live entries displaced by an allocation (alias overwrite or eviction at the floor).
    pub reallocations: u64,
    /// Correct outcomes that raised (or held at the ceiling) an entry's confidence.
    pub reinforcements: u64,

    /// Issued predictions, bucketed by the confidence of the entry that supplied them.
    pub hits_by_confidence: [u64; 4],

    limit_reported: bool,
}

impl Default for PredictionStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            total: 0,
            num_correct: 0,
            lookups: 0,
            misses: 0,
            allocations: 0,
            reallocations: 0,
            reinforcements: 0,
            hits_by_confidence: [0; 4],
            limit_reported: false,
        }
    }
}

impl PredictionStats {
    /// Counts a prediction issued from an entry at `confidence`.
    pub(crate) const fn record_issue(&mut self, confidence: Confidence) {
        self.total += 1;
        self.hits_by_confidence[confidence.get() as usize] += 1;
    }

    /// Counts one evaluated prediction.
    ///
    /// `already_counted` is true when the engine counted the prediction in
    /// `total` at issue time; it is then not counted a second time. `credit`
    /// adds one to `num_correct`.
    pub(crate) const fn record_evaluation(&mut self, already_counted: bool, credit: bool) {
        if !already_counted {
            self.total += 1;
        }
        if credit {
            self.num_correct += 1;
        }
    }

    /// Fraction of issued predictions that were correct (0 when none were issued).
    pub const fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.num_correct as f64 / self.total as f64
        }
    }

    /// Fraction of lookups that produced a prediction (0 when none were made).
    pub const fn coverage(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            (self.lookups - self.misses) as f64 / self.lookups as f64
        }
    }

    /// Issued predictions that were wrong.
    pub const fn mispredictions(&self) -> u64 {
        self.total.saturating_sub(self.num_correct)
    }

    /// Mean trust weight of the entries that supplied predictions.
    ///
    /// Each hit is weighted by its tier in the confidence transition vector.
    pub fn weighted_trust(&self) -> f64 {
        let hits: u64 = self.hits_by_confidence.iter().sum();
        if hits == 0 {
            return 0.0;
        }
        let weighted: f64 = self
            .hits_by_confidence
            .iter()
            .enumerate()
            .map(|(level, &count)| {
                let weight = Confidence::new(level as u8).tier().trust_weight();
                count as f64 * f64::from(weight)
            })
            .sum();
        weighted / hits as f64
    }

    /// True once `limit` predictions have been counted.
    pub const fn limit_reached(&self, limit: u64) -> bool {
        self.total >= limit
    }

    /// Renders the requested sections (all of them for an empty slice).
    pub fn report<'a>(&'a self, sections: &'a [String]) -> StatsReport<'a> {
        StatsReport {
            stats: self,
            sections,
        }
    }

    /// Prints every section to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.report(sections));
    }

    /// Prints all sections the first time `limit` predictions have been counted.
    ///
    /// Returns true only on the call that printed.
    pub fn print_with_limit(&mut self, limit: u64) -> bool {
        if self.limit_reported || !self.limit_reached(limit) {
            return false;
        }
        self.limit_reported = true;
        println!("Prediction limit of {limit} reached.");
        self.print();
        true
    }
}

/// Display adapter produced by [`PredictionStats::report`].
#[derive(Debug)]
pub struct StatsReport<'a> {
    stats: &'a PredictionStats,
    sections: &'a [String],
}

impl StatsReport<'_> {
    fn wants(&self, section: &str) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s == section)
    }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        let pct = |num: u64, den: u64| {
            if den == 0 {
                0.0
            } else {
                num as f64 / den as f64 * 100.0
            }
        };

        if self.wants("summary") {
            let seconds = s.start_time.elapsed().as_secs_f64();
            writeln!(f, "\n==========================================================")?;
            writeln!(f, "LOAD VALUE PREDICTION STATISTICS")?;
            writeln!(f, "==========================================================")?;
            writeln!(f, "host_seconds             {seconds:.4} s")?;
            writeln!(f, "lvp_lookups              {}", s.lookups)?;
            writeln!(
                f,
                "lvp_predictions          {} ({:.2}% coverage)",
                s.total,
                s.coverage() * 100.0
            )?;
            writeln!(f, "lvp_correct              {}", s.num_correct)?;
            writeln!(f, "lvp_incorrect            {}", s.mispredictions())?;
            writeln!(f, "lvp_accuracy             {:.2}%", s.accuracy() * 100.0)?;
            writeln!(f, "----------------------------------------------------------")?;
        }
        if self.wants("table") {
            writeln!(f, "TABLE ACTIVITY")?;
            writeln!(
                f,
                "  lookups.miss           {} ({:.2}%)",
                s.misses,
                pct(s.misses, s.lookups)
            )?;
            writeln!(f, "  allocations            {}", s.allocations)?;
            writeln!(f, "  reallocations          {}", s.reallocations)?;
            writeln!(f, "  reinforcements         {}", s.reinforcements)?;
            writeln!(f, "----------------------------------------------------------")?;
        }
        if self.wants("confidence") {
            writeln!(f, "CONFIDENCE")?;
            for (level, &count) in s.hits_by_confidence.iter().enumerate().skip(1) {
                let tier = Confidence::new(level as u8).tier();
                writeln!(
                    f,
                    "  hits.{:<17}{} ({:.2}%)",
                    tier.label().to_ascii_lowercase(),
                    count,
                    pct(count, s.total)
                )?;
            }
            writeln!(f, "  weighted_trust         {:.4}", s.weighted_trust())?;
            writeln!(f, "==========================================================")?;
        }
        Ok(())
    }
}
