//! Synthetic load streams.
//!
//! Stands in for a benchmark binary when no trace is available. The stream is
//! a loop body of `num_pcs` loads at consecutive word-aligned PCs, repeated
//! forever; the [`WorkloadKind`] decides what value each visit resolves to.

use crate::config::{WorkloadConfig, WorkloadKind};

use super::trace::LoadRecord;

/// Bytes between the data regions of two loads in the loop body.
const REGION_SPAN: u64 = 0x1_0000;

/// Nodes in the pointer-chase ring.
const CHASE_NODES: u64 = 7;

/// Bytes per pointer-chase node.
const NODE_BYTES: u64 = 64;

/// Access width of every synthetic load.
const ACCESS_SIZE: u8 = 8;

/// Infinite, deterministic load stream.
#[derive(Clone, Debug)]
pub struct SyntheticWorkload {
    kind: WorkloadKind,
    base_pc: u64,
    base_addr: u64,
    stride: u64,
    num_pcs: u64,
    step: u64,
}

impl SyntheticWorkload {
    /// Creates a stream positioned at its first load.
    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            kind: config.kind,
            base_pc: config.base_pc,
            base_addr: config.base_addr,
            stride: config.stride,
            num_pcs: config.num_pcs.max(1) as u64,
            step: 0,
        }
    }

    /// Value resolved by the load in slot `slot` on loop iteration `iter`.
    const fn value(&self, slot: u64, iter: u64) -> u64 {
        let region = self.base_addr.wrapping_add(slot.wrapping_mul(REGION_SPAN));
        match self.kind {
            WorkloadKind::Constant => region,
            WorkloadKind::Stride => region.wrapping_add(iter.wrapping_mul(self.stride)),
            WorkloadKind::Alternating => region.wrapping_add((iter % 2) * self.stride),
            WorkloadKind::PointerChase => {
                let node = (iter + slot) % CHASE_NODES;
                self.base_addr.wrapping_add(node * NODE_BYTES)
            }
        }
    }
}

impl Iterator for SyntheticWorkload {
    type Item = LoadRecord;

    fn next(&mut self) -> Option<LoadRecord> {
        let slot = self.step % self.num_pcs;
        let iter = self.step / self.num_pcs;
        self.step = self.step.wrapping_add(1);

        let pc = self.base_pc.wrapping_add(slot.wrapping_mul(4));
        Some(LoadRecord::new(pc, self.value(slot, iter)).with_size(ACCESS_SIZE))
    }

    /// Skips `n` loads in constant time.
    fn nth(&mut self, n: usize) -> Option<LoadRecord> {
        self.step = self.step.wrapping_add(n as u64);
        self.next()
    }
}
