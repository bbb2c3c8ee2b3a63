//! Address Prediction Table (APT).
//!
//! The APT is a direct-mapped table of [`APT_SIZE`] entries. A load's slot is
//! chosen by XOR-folding its PC with the load path history; a 14-bit tag taken
//! from a different fold of the PC verifies that the slot belongs to this load
//! and not to an alias.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `index()` / `tag()`: O(1)
//!   - `get_entry()` / `set_entry()`: O(1)
//! - **Space Complexity:** O(N) with N = 1024 entries
//! - **Hardware Cost:** Low - one table read, one XOR tree per hash, one tag compare
//! - **Best Case:** Loads whose value repeats across visits of the same path
//! - **Worst Case:** Many hot loads aliasing into the same slots

use crate::common::constants::{APT_INDEX_MASK, APT_SIZE, TAG_MASK};

use super::confidence::Confidence;

/// One slot of the Address Prediction Table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AptEntry {
    /// 14-bit tag identifying the owning load.
    pub tag: u16,
    /// Predicted address (also used as the predicted data value).
    pub address: u64,
    /// Saturating confidence counter.
    pub confidence: Confidence,
    /// Access width in bytes. Recorded for analysis, never used in prediction.
    pub size: u8,
}

impl AptEntry {
    /// Returns the entry with its access width replaced.
    pub const fn with_size(self, size: u8) -> Self {
        Self { size, ..self }
    }

    /// True when the slot holds no usable entry.
    pub const fn is_empty(&self) -> bool {
        self.confidence.is_empty()
    }
}

/// Computes the table index for `pc` under the given path history.
///
/// Folds three 10-bit windows of the word-aligned PC and three windows of the
/// history register together, then masks to [`APT_INDEX_MASK`].
#[inline(always)]
pub const fn index(pc: u64, history: u32) -> usize {
    let h = history as u64;
    let pc_fold = (pc >> 2) ^ (pc >> 12) ^ (pc >> 22);
    let hist_fold = h ^ (h >> 10) ^ (h >> 20);
    ((pc_fold ^ hist_fold) & APT_INDEX_MASK) as usize
}

/// Computes the 14-bit tag for `pc`.
///
/// Uses 14-bit fold windows, so two PCs that collide on the 10-bit index fold
/// rarely collide here as well.
#[inline(always)]
pub const fn tag(pc: u64) -> u16 {
    let fold = (pc >> 2) ^ (pc >> 16) ^ (pc >> 30) ^ (pc >> 44);
    (fold & TAG_MASK) as u16
}

/// Address Prediction Table storage.
#[derive(Clone, Debug)]
pub struct Apt {
    /// The table of entries.
    table: Vec<AptEntry>,
}

impl Apt {
    /// Creates a table with every slot empty.
    pub fn new() -> Self {
        Self {
            table: vec![AptEntry::default(); APT_SIZE],
        }
    }

    /// Returns a copy of the entry at `index`.
    ///
    /// Out-of-range indices are masked into the table.
    #[inline(always)]
    pub fn get_entry(&self, index: usize) -> AptEntry {
        self.table[index & (APT_SIZE - 1)]
    }

    /// Overwrites the entry at `index`.
    ///
    /// Out-of-range indices are masked into the table.
    #[inline(always)]
    pub fn set_entry(&mut self, index: usize, entry: AptEntry) {
        self.table[index & (APT_SIZE - 1)] = entry;
    }

    /// Number of slots (always [`APT_SIZE`]).
    pub const fn len(&self) -> usize {
        APT_SIZE
    }

    /// Always false; the table never shrinks.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Number of slots currently holding a usable entry.
    pub fn occupancy(&self) -> usize {
        self.table.iter().filter(|e| !e.is_empty()).count()
    }

    /// Number of live entries at each confidence level, indexed by counter value.
    pub fn confidence_histogram(&self) -> [usize; 4] {
        let mut histogram = [0; 4];
        for entry in &self.table {
            histogram[entry.confidence.get() as usize] += 1;
        }
        histogram
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.table.fill(AptEntry::default());
    }
}

impl Default for Apt {
    fn default() -> Self {
        Self::new()
    }
}
