use super::*;
use crate::score::{MetricOutcome, MetricScore, MissingSide};
use crate::size::SizeLabel;

fn measured(metric: Metric, critical: bool) -> MetricScore {
    MetricScore {
        metric,
        critical,
        weight: if critical { 1.0 } else { 0.5 },
        outcome: MetricOutcome::Measured {
            body_cm: 100.0,
            garment_cm: 100.0,
            delta: 0.0,
            contribution: 0.0,
        },
    }
}

fn missing(metric: Metric, critical: bool) -> MetricScore {
    MetricScore {
        metric,
        critical,
        weight: if critical { 1.0 } else { 0.5 },
        outcome: MetricOutcome::Missing {
            side: MissingSide::Body,
            penalty: 0.0,
        },
    }
}

fn result(total: f64, metrics: Vec<MetricScore>) -> ScoreResult {
    let missing_count = metrics.iter().filter(|m| m.is_missing()).count();
    ScoreResult {
        size: SizeLabel::M,
        metrics,
        missing_count,
        fit_score: total,
        missing_penalty: 0.0,
        total,
    }
}

#[test]
fn perfect_match_is_full_confidence() {
    let r = result(0.0, vec![measured(Metric::Chest, true)]);
    let (b, reasons) = compute(&r, false, &ConfidenceConfig::default());
    assert_eq!(b.base, 1.0);
    assert_eq!(b.value, 1.0);
    assert!(b.factors.is_empty());
    assert!(reasons.is_empty());
}

#[test]
fn base_scales_with_total_score() {
    let r = result(25.0, vec![]);
    let (b, _) = compute(&r, false, &ConfidenceConfig::default());
    assert!((b.value - 0.75).abs() < 1e-12);
}

#[test]
fn base_floors_at_zero() {
    let r = result(250.0, vec![]);
    let (b, reasons) = compute(&r, false, &ConfidenceConfig::default());
    assert_eq!(b.base, 0.0);
    assert_eq!(b.value, 0.0);
    assert_eq!(reasons, vec![ReasonCode::LowConfidence, ReasonCode::ConfidenceWarning]);
}

#[test]
fn missing_critical_factors_compound() {
    let r = result(
        0.0,
        vec![
            missing(Metric::Chest, true),
            missing(Metric::ShoulderWidth, true),
            missing(Metric::SleeveLength, false),
        ],
    );
    let (b, _) = compute(&r, false, &ConfidenceConfig::default());
    assert_eq!(b.factors.len(), 2, "secondary metrics add no factor");
    assert!((b.value - 0.64).abs() < 1e-12, "0.8 * 0.8, got {}", b.value);
}

#[test]
fn guardrail_override_penalized() {
    let r = result(0.0, vec![]);
    let (b, reasons) = compute(&r, true, &ConfidenceConfig::default());
    assert!((b.value - 0.85).abs() < 1e-12);
    assert_eq!(reasons, vec![ReasonCode::GuardrailConfidencePenalty]);
    assert_eq!(b.factors, vec![ConfidenceFactor::GuardrailOverride { multiplier: 0.85 }]);
}

#[test]
fn warning_band_between_thresholds() {
    // 0.5 is below warning (0.6) but above minimum (0.35).
    let r = result(50.0, vec![]);
    let (_, reasons) = compute(&r, false, &ConfidenceConfig::default());
    assert_eq!(reasons, vec![ReasonCode::ConfidenceWarning]);
}

#[test]
fn non_increasing_in_missing_critical_count() {
    let cfg = ConfidenceConfig::default();
    let mut last = f64::INFINITY;
    for k in 0..=3 {
        let metrics = [Metric::Chest, Metric::Waist, Metric::Hip]
            .iter()
            .enumerate()
            .map(|(i, &m)| if i < k { missing(m, true) } else { measured(m, true) })
            .collect();
        let (b, _) = compute(&result(10.0, metrics), false, &cfg);
        assert!(b.value <= last, "k={k}: {} > {last}", b.value);
        last = b.value;
    }
}
