//! # Synthetic Workload Tests
//!
//! Shape of each synthetic stream: PC layout and per-visit values.

use dlvp_core::config::{WorkloadConfig, WorkloadKind};
use dlvp_core::sim::SyntheticWorkload;

fn stream(kind: WorkloadKind, num_pcs: usize) -> SyntheticWorkload {
    SyntheticWorkload::new(&WorkloadConfig {
        kind,
        base_pc: 0x1000,
        base_addr: 0x10_0000,
        stride: 8,
        num_pcs,
    })
}

#[test]
fn pcs_cycle_through_loop_body() {
    let pcs: Vec<u64> = stream(WorkloadKind::Constant, 3)
        .take(7)
        .map(|r| r.pc)
        .collect();
    assert_eq!(pcs, vec![0x1000, 0x1004, 0x1008, 0x1000, 0x1004, 0x1008, 0x1000]);
}

#[test]
fn every_record_carries_width() {
    assert!(stream(WorkloadKind::Stride, 4).take(20).all(|r| r.size == Some(8)));
}

#[test]
fn constant_values_repeat_per_pc() {
    let values: Vec<u64> = stream(WorkloadKind::Constant, 2)
        .take(6)
        .map(|r| r.value)
        .collect();
    assert_eq!(
        values,
        vec![0x10_0000, 0x11_0000, 0x10_0000, 0x11_0000, 0x10_0000, 0x11_0000]
    );
}

#[test]
fn stride_values_advance_per_visit() {
    let values: Vec<u64> = stream(WorkloadKind::Stride, 1)
        .take(4)
        .map(|r| r.value)
        .collect();
    assert_eq!(values, vec![0x10_0000, 0x10_0008, 0x10_0010, 0x10_0018]);
}

#[test]
fn alternating_values_flip() {
    let values: Vec<u64> = stream(WorkloadKind::Alternating, 1)
        .take(4)
        .map(|r| r.value)
        .collect();
    assert_eq!(values, vec![0x10_0000, 0x10_0008, 0x10_0000, 0x10_0008]);
}

#[test]
fn pointer_chase_repeats_every_seven_laps() {
    let values: Vec<u64> = stream(WorkloadKind::PointerChase, 1)
        .take(14)
        .map(|r| r.value)
        .collect();
    assert_eq!(&values[..7], &values[7..]);
    assert_eq!(values[1], 0x10_0040);
}

#[test]
fn zero_pcs_behaves_like_one() {
    let pcs: Vec<u64> = stream(WorkloadKind::Constant, 0)
        .take(3)
        .map(|r| r.pc)
        .collect();
    assert_eq!(pcs, vec![0x1000; 3]);
}

#[test]
fn nth_skips_without_iterating() {
    let mut loads = stream(WorkloadKind::Stride, 2);
    let record = loads.nth(1_000_001).unwrap();
    assert_eq!(record.pc, 0x1004);
    assert_eq!(record.value, 0x11_0000 + 500_000 * 8);
    assert_eq!(loads.next().unwrap().pc, 0x1000);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn huge_loop_body_wraps_pc_instead_of_overflowing() {
    let mut loads = stream(WorkloadKind::Constant, usize::MAX);
    // Slot 2^62 + 1: the 4-byte PC spacing wraps past the top of the address space.
    let record = loads.nth((1 << 62) + 1).unwrap();
    assert_eq!(record.pc, 0x1004);
}
