//! Global Predictor Constants.
//!
//! This module defines the fixed hardware parameters of the load value predictor. It includes:
//! 1. **Table Geometry:** Entry count, index width, and tag width of the Address Prediction Table.
//! 2. **History Constants:** Width of the load path history register.
//! 3. **Confidence Constants:** Counter bounds and the trust weights reported per tier.
//! 4. **Simulation Constants:** Default load budget for a replay run.

/// Number of entries in the Address Prediction Table.
pub const APT_SIZE: usize = 1024;

/// Number of index bits needed to address [`APT_SIZE`] entries.
pub const APT_INDEX_BITS: u32 = 10;

/// Mask applied to a folded hash to produce a table index.
pub const APT_INDEX_MASK: u64 = (APT_SIZE as u64) - 1;

/// Width of the load path history register in bits.
pub const LOAD_PATH_REG_SIZE: u32 = 32;

/// Width of an entry tag in bits.
pub const TAG_BIT_LENGTH: u32 = 14;

/// Mask applied to a folded hash to produce a tag.
pub const TAG_MASK: u64 = (1 << TAG_BIT_LENGTH) - 1;

/// Number of bits the path history register shifts per observed load.
pub const PATH_HISTORY_SHIFT: u32 = 4;

/// Saturation ceiling of an entry's confidence counter.
pub const MAX_CONFIDENCE: u8 = 3;

/// Confidence assigned to a freshly allocated entry (lowest non-empty tier).
pub const INITIAL_CONFIDENCE: u8 = 1;

/// Trust weights for the HIGH, MEDIUM and LOW confidence tiers, in that order.
///
/// Reporting only; the weights never gate a prediction.
pub const CONFIDENCE_TRANSITION_VECTOR: [f32; 3] = [1.0, 0.5, 0.25];

/// Number of loads a replay run predicts before reporting.
pub const NUM_LOADS_TO_PREDICT: u64 = 100_000;

/// Access width recorded for entries when the host does not supply one (bytes).
pub const DEFAULT_ACCESS_SIZE: u8 = 8;
