//! Configuration system for the load value predictor.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline constants (load budget, hit threshold, access width, workload shape).
//! 2. **Structures:** Hierarchical config for general, predictor, and workload settings.
//! 3. **Validation:** Range checks reported as [`ConfigError`].
//!
//! Configuration is supplied as JSON (every field optional) or via `Config::default()`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::constants::{
    DEFAULT_ACCESS_SIZE, INITIAL_CONFIDENCE, MAX_CONFIDENCE, NUM_LOADS_TO_PREDICT,
};
use crate::common::error::ConfigError;

/// Default configuration constants.
///
/// These values define the baseline run when not explicitly overridden in JSON.
mod defaults {
    /// Lowest confidence an entry needs before it may issue a prediction.
    pub const HIT_THRESHOLD: u8 = super::INITIAL_CONFIDENCE;

    /// First load PC emitted by synthetic workloads.
    pub const WORKLOAD_BASE_PC: u64 = 0x8000_1000;

    /// Base data address touched by synthetic workloads.
    pub const WORKLOAD_BASE_ADDR: u64 = 0x8010_0000;

    /// Byte stride between consecutive accesses of one synthetic load.
    pub const WORKLOAD_STRIDE: u64 = 8;

    /// Number of distinct load PCs in a synthetic loop body.
    pub const WORKLOAD_NUM_PCS: usize = 16;
}

/// Synthetic load stream shapes.
///
/// Each kind produces a deterministic stream so runs are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum WorkloadKind {
    /// Every load PC always returns the same value.
    Constant,
    /// Every load PC walks an array with a fixed stride.
    #[default]
    Stride,
    /// Every load PC alternates between two values.
    Alternating,
    /// Loads follow a fixed cyclic linked list (values repeat every lap).
    PointerChase,
}

impl WorkloadKind {
    /// All workload kinds, in CLI help order.
    pub const ALL: [Self; 4] = [
        Self::Constant,
        Self::Stride,
        Self::Alternating,
        Self::PointerChase,
    ];

    /// Lower-case name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Stride => "stride",
            Self::Alternating => "alternating",
            Self::PointerChase => "pointer-chase",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkloadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("unknown workload `{s}` (expected one of: {})", names.join(", "))
            })
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use dlvp_core::config::{Config, WorkloadKind};
///
/// let config = Config::default();
/// assert_eq!(config.general.max_loads, 100_000);
/// assert_eq!(config.predictor.hit_threshold, 1);
///
/// let json = r#"{
///     "general": { "max_loads": 5000, "trace_loads": true },
///     "predictor": { "hit_threshold": 2 },
///     "workload": { "kind": "Alternating", "num_pcs": 4 }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_loads, 5000);
/// assert_eq!(config.predictor.hit_threshold, 2);
/// assert_eq!(config.predictor.default_access_size, 8);
/// assert_eq!(config.workload.kind, WorkloadKind::Alternating);
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Address Prediction Table settings
    #[serde(default)]
    pub predictor: PredictorConfig,
    /// Synthetic workload settings (ignored when replaying a trace)
    #[serde(default)]
    pub workload: WorkloadConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the range errors
    /// from [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks every field against its legal range.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.max_loads == 0 {
            return Err(ConfigError::ZeroMaxLoads);
        }
        let threshold = self.predictor.hit_threshold;
        if threshold < INITIAL_CONFIDENCE || threshold > MAX_CONFIDENCE {
            return Err(ConfigError::HitThreshold(threshold));
        }
        if self.predictor.default_access_size == 0 {
            return Err(ConfigError::ZeroAccessSize);
        }
        if self.workload.num_pcs == 0 {
            return Err(ConfigError::ZeroWorkloadPcs);
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Number of loads the driver replays before stopping and reporting.
    #[serde(default = "GeneralConfig::default_max_loads")]
    pub max_loads: u64,

    /// Log every replayed load (PC, prediction, outcome) at info level.
    #[serde(default)]
    pub trace_loads: bool,
}

impl GeneralConfig {
    /// Returns the default load budget.
    const fn default_max_loads() -> u64 {
        NUM_LOADS_TO_PREDICT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_loads: Self::default_max_loads(),
            trace_loads: false,
        }
    }
}

/// Address Prediction Table settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictorConfig {
    /// Minimum confidence (1..=3) an entry needs to report a hit.
    #[serde(default = "PredictorConfig::default_hit_threshold")]
    pub hit_threshold: u8,

    /// Access width recorded on allocation when the host supplies none.
    #[serde(default = "PredictorConfig::default_access_size")]
    pub default_access_size: u8,
}

impl PredictorConfig {
    /// Returns the default hit threshold.
    const fn default_hit_threshold() -> u8 {
        defaults::HIT_THRESHOLD
    }

    /// Returns the default access width in bytes.
    const fn default_access_size() -> u8 {
        DEFAULT_ACCESS_SIZE
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            hit_threshold: Self::default_hit_threshold(),
            default_access_size: Self::default_access_size(),
        }
    }
}

/// Synthetic workload settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkloadConfig {
    /// Stream shape
    #[serde(default)]
    pub kind: WorkloadKind,
    /// First load PC; later PCs follow at 4-byte spacing
    #[serde(default = "WorkloadConfig::default_base_pc")]
    pub base_pc: u64,
    /// Base of the data region touched by the loads
    #[serde(default = "WorkloadConfig::default_base_addr")]
    pub base_addr: u64,
    /// Byte stride between successive accesses of one PC
    #[serde(default = "WorkloadConfig::default_stride")]
    pub stride: u64,
    /// Number of distinct load PCs in the loop body
    #[serde(default = "WorkloadConfig::default_num_pcs")]
    pub num_pcs: usize,
}

impl WorkloadConfig {
    const fn default_base_pc() -> u64 {
        defaults::WORKLOAD_BASE_PC
    }

    const fn default_base_addr() -> u64 {
        defaults::WORKLOAD_BASE_ADDR
    }

    const fn default_stride() -> u64 {
        defaults::WORKLOAD_STRIDE
    }

    const fn default_num_pcs() -> usize {
        defaults::WORKLOAD_NUM_PCS
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            kind: WorkloadKind::default(),
            base_pc: Self::default_base_pc(),
            base_addr: Self::default_base_addr(),
            stride: Self::default_stride(),
            num_pcs: Self::default_num_pcs(),
        }
    }
}
