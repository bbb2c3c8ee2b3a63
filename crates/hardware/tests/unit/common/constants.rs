//! # Constant Tests
//!
//! Guards the table geometry the index and tag hashes depend on.

use dlvp_core::common::constants::*;

#[test]
fn test_table_geometry_is_consistent() {
    assert_eq!(APT_SIZE, 1 << APT_INDEX_BITS);
    assert_eq!(APT_INDEX_MASK, (APT_SIZE - 1) as u64);
}

#[test]
fn test_tag_mask_matches_tag_width() {
    assert_eq!(TAG_BIT_LENGTH, 14);
    assert_eq!(TAG_MASK, (1 << TAG_BIT_LENGTH) - 1);
}

#[test]
fn test_confidence_bounds() {
    assert_eq!(INITIAL_CONFIDENCE, 1);
    assert_eq!(MAX_CONFIDENCE, 3);
    assert_eq!(CONFIDENCE_TRANSITION_VECTOR, [1.0, 0.5, 0.25]);
}

#[test]
fn test_run_defaults() {
    assert_eq!(NUM_LOADS_TO_PREDICT, 100_000);
    assert_eq!(LOAD_PATH_REG_SIZE, 32);
    assert_eq!(DEFAULT_ACCESS_SIZE, 8);
}
