//! # Configuration Tests
//!
//! Defaults, JSON deserialization, file loading and validation.

use std::io::Write;

use dlvp_core::common::ConfigError;
use dlvp_core::config::*;
use rstest::rstest;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.general.max_loads, 100_000);
    assert!(!config.general.trace_loads);
    assert_eq!(config.predictor.hit_threshold, 1);
    assert_eq!(config.predictor.default_access_size, 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_workload_config_defaults() {
    let workload = WorkloadConfig::default();
    assert_eq!(workload.kind, WorkloadKind::Stride);
    assert_eq!(workload.base_pc, 0x8000_1000);
    assert_eq!(workload.base_addr, 0x8010_0000);
    assert_eq!(workload.stride, 8);
    assert_eq!(workload.num_pcs, 16);
}

#[test]
fn test_empty_json_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.general.max_loads, 100_000);
    assert_eq!(config.workload.kind, WorkloadKind::Stride);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::from_json(r#"{ "workload": { "kind": "PointerChase" } }"#).unwrap();
    assert_eq!(config.workload.kind, WorkloadKind::PointerChase);
    assert_eq!(config.workload.num_pcs, 16);
    assert_eq!(config.predictor.hit_threshold, 1);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = Config::from_json("{ general: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_unknown_workload_kind_is_parse_error() {
    let err = Config::from_json(r#"{ "workload": { "kind": "Random" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[rstest]
#[case(r#"{ "general": { "max_loads": 0 } }"#)]
#[case(r#"{ "predictor": { "hit_threshold": 0 } }"#)]
#[case(r#"{ "predictor": { "hit_threshold": 4 } }"#)]
#[case(r#"{ "predictor": { "default_access_size": 0 } }"#)]
#[case(r#"{ "workload": { "num_pcs": 0 } }"#)]
fn test_out_of_range_values_are_rejected(#[case] json: &str) {
    let err = Config::from_json(json).unwrap_err();
    assert!(!matches!(err, ConfigError::Parse(_)), "{err}");
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn test_hit_threshold_range_accepted(#[case] threshold: u8) {
    let mut config = Config::default();
    config.predictor.hit_threshold = threshold;
    assert!(config.validate().is_ok());
}

#[test]
fn test_hit_threshold_error_carries_value() {
    let mut config = Config::default();
    config.predictor.hit_threshold = 9;
    assert!(matches!(config.validate(), Err(ConfigError::HitThreshold(9))));
}

#[test]
fn test_serialized_config_round_trips() {
    let mut config = Config::default();
    config.general.max_loads = 42;
    config.workload.kind = WorkloadKind::Alternating;
    let json = serde_json::to_string(&config).unwrap();
    let back = Config::from_json(&json).unwrap();
    assert_eq!(back.general.max_loads, 42);
    assert_eq!(back.workload.kind, WorkloadKind::Alternating);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "max_loads": 250 }} }}"#).unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.general.max_loads, 250);
}

#[test]
fn test_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[rstest]
#[case("constant", WorkloadKind::Constant)]
#[case("stride", WorkloadKind::Stride)]
#[case("Alternating", WorkloadKind::Alternating)]
#[case("pointer-chase", WorkloadKind::PointerChase)]
fn test_workload_kind_from_str(#[case] text: &str, #[case] kind: WorkloadKind) {
    assert_eq!(text.parse::<WorkloadKind>().unwrap(), kind);
}

#[test]
fn test_workload_kind_from_str_lists_choices() {
    let err = "zigzag".parse::<WorkloadKind>().unwrap_err();
    assert!(err.contains("pointer-chase"));
}

#[test]
fn test_workload_kind_display_matches_name() {
    for kind in WorkloadKind::ALL {
        assert_eq!(kind.to_string(), kind.name());
    }
}
