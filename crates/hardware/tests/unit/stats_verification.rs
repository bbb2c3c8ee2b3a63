//! # Statistics Verification
//!
//! Derived figures, section selection and the one-shot limit report.

use dlvp_core::AptPredictor;
use dlvp_core::stats::{PredictionStats, STATS_SECTIONS};

use crate::common::harness::TestContext;

fn sections(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_fresh_stats_are_zero() {
    let stats = PredictionStats::default();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.num_correct, 0);
    assert_eq!(stats.lookups, 0);
    assert_eq!(stats.hits_by_confidence, [0; 4]);
    assert!(stats.accuracy().abs() < f64::EPSILON);
    assert!(stats.coverage().abs() < f64::EPSILON);
    assert!(stats.weighted_trust().abs() < f64::EPSILON);
}

#[test]
fn test_accuracy_and_coverage() {
    let mut ctx = TestContext::new();
    let _ = ctx.cycle(0x100, 1);
    let _ = ctx.cycle(0x100, 1);
    let _ = ctx.cycle(0x100, 2);
    let _ = ctx.cycle(0x100, 2);

    let stats = ctx.apt.stats();
    assert_eq!(stats.lookups, 4);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.num_correct, 1);
    assert!((stats.coverage() - 0.75).abs() < 1e-9);
    assert!((stats.accuracy() - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_weighted_trust_uses_tier_weights() {
    let mut ctx = TestContext::new();
    ctx.apt.train_apt(0, 7, 0x100);
    let _ = ctx.apt.get_prediction(0x100); // LOW: 0.25
    ctx.reinforce(0x100);
    ctx.reinforce(0x100);
    let _ = ctx.apt.get_prediction(0x100); // HIGH: 1.0

    let stats = ctx.apt.stats();
    assert_eq!(stats.hits_by_confidence, [0, 1, 0, 1]);
    assert!((stats.weighted_trust() - 0.625).abs() < 1e-9);
}

#[test]
fn test_report_contains_all_sections_by_default() {
    let stats = PredictionStats::default();
    let text = stats.report(&[]).to_string();
    assert!(text.contains("LOAD VALUE PREDICTION STATISTICS"));
    assert!(text.contains("TABLE ACTIVITY"));
    assert!(text.contains("CONFIDENCE"));
    assert!(text.contains("hits.high"));
}

#[test]
fn test_report_section_selection() {
    let stats = PredictionStats::default();
    let only_table = sections(&["table"]);
    let text = stats.report(&only_table).to_string();
    assert!(text.contains("TABLE ACTIVITY"));
    assert!(!text.contains("lvp_accuracy"));
    assert!(!text.contains("weighted_trust"));
}

#[test]
fn test_report_lists_counters() {
    let mut ctx = TestContext::new();
    let _ = ctx.cycle(0x100, 1);
    let _ = ctx.cycle(0x100, 1);
    let summary = sections(&["summary"]);
    let text = ctx.apt.stats().report(&summary).to_string();
    assert!(text.contains("lvp_predictions          1"));
    assert!(text.contains("lvp_correct              1"));
    assert!(text.contains("lvp_accuracy             100.00%"));
}

#[test]
fn test_section_names_are_known() {
    assert_eq!(STATS_SECTIONS, &["summary", "table", "confidence"]);
}

#[test]
fn test_limit_report_fires_once() {
    let mut apt = AptPredictor::default();
    apt.train_apt(0, 5, 0x100);
    assert!(!apt.print_stats_with_limit(2));

    let _ = apt.get_prediction(0x100);
    assert!(!apt.print_stats_with_limit(2));
    let _ = apt.get_prediction(0x100);
    assert!(apt.stats().limit_reached(2));
    assert!(apt.print_stats_with_limit(2));
    assert!(!apt.print_stats_with_limit(2));
}

#[test]
fn test_counters_never_decrease() {
    let mut ctx = TestContext::new();
    let mut last = (0, 0, 0, 0);
    for i in 0..200_u64 {
        let _ = ctx.cycle(0x100 + (i % 5) * 4, i % 3);
        ctx.apt.update_path_history(0x100 + (i % 5) * 4);
        let s = ctx.apt.stats();
        let now = (s.total, s.num_correct, s.allocations, s.lookups);
        assert!(now.0 >= last.0 && now.1 >= last.1 && now.2 >= last.2 && now.3 >= last.3);
        last = now;
    }
}
