//! Load Path History Register.
//!
//! A 32-bit rolling hash of the PCs of recently observed loads. Each load
//! shifts the register left by [`PATH_HISTORY_SHIFT`] bits and XORs in the
//! word-aligned PC, so the register covers roughly the last eight loads. A
//! loop that revisits the same PCs settles into a repeating sequence of
//! history values, which keeps its table indices stable.

use std::fmt;

use crate::common::constants::PATH_HISTORY_SHIFT;

/// Path history register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PathHistory(u32);

impl PathHistory {
    /// Creates an empty register.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Folds the PC of an observed load into the register.
    #[inline(always)]
    pub const fn update(&mut self, pc: u64) {
        self.0 = (self.0 << PATH_HISTORY_SHIFT) ^ ((pc >> 2) as u32);
    }

    /// Current register contents.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Clears the register.
    pub const fn reset(&mut self) {
        self.0 = 0;
    }
}

impl fmt::Binary for PathHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for PathHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
