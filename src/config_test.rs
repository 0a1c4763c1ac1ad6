use super::*;
use std::fs;

#[test]
fn defaults_are_valid() {
    EngineConfig::default().validate().unwrap();
}

#[test]
fn default_floors_match_height_policy() {
    let floors = EngineConfig::default().guardrail.floors;
    assert_eq!(floors.len(), 2);
    assert_eq!(floors[0].min_height_cm, 183.0);
    assert_eq!(floors[0].size, SizeLabel::L);
    assert_eq!(floors[1].min_height_cm, 190.0);
    assert_eq!(floors[1].size, SizeLabel::Xl);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let cfg = EngineConfig::from_toml_str(
        r#"
[confidence]
warning_threshold = 0.7

[category]
auto_switch = false
"#,
    )
    .unwrap();
    assert_eq!(cfg.confidence.warning_threshold, 0.7);
    assert_eq!(cfg.confidence.min_threshold, 0.35);
    assert!(!cfg.category.auto_switch);
    assert_eq!(cfg.scoring, ScoringConfig::default());
}

#[test]
fn floors_from_toml() {
    let cfg = EngineConfig::from_toml_str(
        r#"
[guardrail]
floors = [
    { min_height_cm = 175.0, size = "M" },
    { min_height_cm = 185.0, size = "L" },
]
"#,
    )
    .unwrap();
    assert_eq!(cfg.guardrail.floors[0].size, SizeLabel::M);
    assert_eq!(cfg.guardrail.floors[1].min_height_cm, 185.0);
}

#[test]
fn rejects_unsorted_floors() {
    let err = EngineConfig::from_toml_str(
        r#"
[guardrail]
floors = [
    { min_height_cm = 190.0, size = "XL" },
    { min_height_cm = 183.0, size = "L" },
]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");
}

#[test]
fn rejects_warning_below_minimum() {
    let err = EngineConfig::from_toml_str(
        "[confidence]\nmin_threshold = 0.5\nwarning_threshold = 0.4\n",
    )
    .unwrap_err();
    assert!(err.to_string().contains("warning_threshold"), "got {err}");
}

#[test]
fn rejects_weight_ratio_other_than_two() {
    let err = EngineConfig::from_toml_str(
        "[scoring]\ncritical_weight = 1.0\nsecondary_weight = 1.0\n",
    )
    .unwrap_err();
    assert!(err.to_string().contains("twice"), "got {err}");
}

#[test]
fn rejects_unknown_keys() {
    let err = EngineConfig::from_toml_str("[scoring]\nbogus = 1\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err}");
}

#[test]
fn toml_round_trip_of_defaults() {
    let text = EngineConfig::default().to_toml_string().unwrap();
    let back = EngineConfig::from_toml_str(&text).unwrap();
    assert_eq!(back, EngineConfig::default());
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sizewise.toml");
    fs::write(&path, "[scoring]\nmissing_penalty = 40.0\n").unwrap();
    let cfg = EngineConfig::load(&path).unwrap();
    assert_eq!(cfg.scoring.missing_penalty, 40.0);
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = EngineConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"), "got {err}");
}
