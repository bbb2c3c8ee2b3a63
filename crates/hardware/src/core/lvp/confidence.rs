//! Saturating Confidence Counters.
//!
//! Every APT entry carries a 2-bit confidence counter. The counter moves one
//! step per training event and is clamped to `[0, MAX_CONFIDENCE]` explicitly
//! rather than relying on integer wraparound.
//!
//! ```text
//! EMPTY(0) --allocate--> LOW(1) --correct--> MEDIUM(2) --correct--> HIGH(3)
//! HIGH --incorrect--> MEDIUM --incorrect--> LOW --incorrect--> EMPTY (reallocated)
//! ```

use std::fmt;

use crate::common::constants::{CONFIDENCE_TRANSITION_VECTOR, INITIAL_CONFIDENCE, MAX_CONFIDENCE};

/// Saturating increment: `min(old + 1, MAX_CONFIDENCE)`.
///
/// Inputs above the ceiling are clamped to it.
#[inline(always)]
pub const fn increment_confidence(old_conf: u8) -> u8 {
    if old_conf >= MAX_CONFIDENCE {
        MAX_CONFIDENCE
    } else {
        old_conf + 1
    }
}

/// A confidence counter that can never leave `[0, 3]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Confidence(u8);

impl Confidence {
    /// Empty slot; eligible for reallocation.
    pub const EMPTY: Self = Self(0);
    /// Tier assigned on allocation.
    pub const LOW: Self = Self(INITIAL_CONFIDENCE);
    /// One correct outcome after allocation.
    pub const MEDIUM: Self = Self(INITIAL_CONFIDENCE + 1);
    /// Saturated.
    pub const HIGH: Self = Self(MAX_CONFIDENCE);

    /// Creates a counter, clamping `raw` to the ceiling.
    pub const fn new(raw: u8) -> Self {
        if raw > MAX_CONFIDENCE {
            Self(MAX_CONFIDENCE)
        } else {
            Self(raw)
        }
    }

    /// Raw counter value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the counter one step higher, saturating at [`Confidence::HIGH`].
    pub const fn increment(self) -> Self {
        Self(increment_confidence(self.0))
    }

    /// Returns the counter one step lower, saturating at [`Confidence::EMPTY`].
    pub const fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// True when the slot holds no usable entry.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Maps the counter onto its trust tier.
    pub const fn tier(self) -> ConfidenceTier {
        match self.0 {
            0 => ConfidenceTier::Empty,
            1 => ConfidenceTier::Low,
            2 => ConfidenceTier::Medium,
            _ => ConfidenceTier::High,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.tier())
    }
}

/// Informal trust level of a confidence counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfidenceTier {
    /// No entry.
    Empty,
    /// Freshly allocated.
    Low,
    /// Confirmed once.
    Medium,
    /// Confirmed at least twice.
    High,
}

impl ConfidenceTier {
    /// Trust weight from [`CONFIDENCE_TRANSITION_VECTOR`] (HIGH, MEDIUM, LOW order).
    ///
    /// Used for reporting only; an empty slot carries no trust.
    pub const fn trust_weight(self) -> f32 {
        match self {
            Self::High => CONFIDENCE_TRANSITION_VECTOR[0],
            Self::Medium => CONFIDENCE_TRANSITION_VECTOR[1],
            Self::Low => CONFIDENCE_TRANSITION_VECTOR[2],
            Self::Empty => 0.0,
        }
    }

    /// Upper-case label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
