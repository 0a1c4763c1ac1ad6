use super::*;
use crate::category::CategoryId;
use crate::chart::ChartEntry;

fn chart(entries: Vec<ChartEntry>) -> GarmentSizeChart {
    GarmentSizeChart::new(Unit::Cm, entries).unwrap()
}

#[test]
fn garment_chart_values_pass_through() {
    let c = chart(vec![
        ChartEntry::new(SizeLabel::M)
            .chart_type("garment")
            .with(Metric::Chest, 100.0),
    ]);
    let body = BodyMeasurementSet::new(Unit::Cm).with(Metric::Chest, 98.0);
    let n = normalize(&body, &c, None, &NormalizeConfig::default()).unwrap();
    let e = &n.entries[0];
    assert_eq!(e.chart_type, ChartType::Garment);
    assert!(!e.defaulted);
    let profile = CategoryId::UpperBody.profile();
    assert_eq!(e.garment(Metric::Chest, profile), MetricValue::Present(100.0));
    assert!(n.reasons.is_empty());
}

#[test]
fn body_chart_adds_category_ease() {
    let c = chart(vec![
        ChartEntry::new(SizeLabel::M)
            .chart_type("body")
            .with(Metric::Chest, 100.0)
            .with(Metric::Waist, 80.0),
    ]);
    let body = BodyMeasurementSet::new(Unit::Cm);
    let n = normalize(&body, &c, None, &NormalizeConfig::default()).unwrap();
    let e = &n.entries[0];
    assert_eq!(e.chart_type, ChartType::Body);
    let upper = CategoryId::UpperBody.profile();
    let lower = CategoryId::LowerBody.profile();
    assert_eq!(e.garment(Metric::Chest, upper), MetricValue::Present(106.0));
    assert_eq!(e.garment(Metric::Waist, upper), MetricValue::Present(84.0));
    assert_eq!(e.garment(Metric::Waist, lower), MetricValue::Present(82.0));
    assert_eq!(e.garment(Metric::Hip, upper), MetricValue::Missing);
}

#[test]
fn missing_chart_type_defaults_to_garment_with_reason() {
    let c = chart(vec![
        ChartEntry::new(SizeLabel::S).with(Metric::Chest, 90.0),
        ChartEntry::new(SizeLabel::M).with(Metric::Chest, 96.0),
    ]);
    let body = BodyMeasurementSet::new(Unit::Cm);
    let n = normalize(&body, &c, None, &NormalizeConfig::default()).unwrap();
    assert!(n.entries.iter().all(|e| e.defaulted && e.chart_type == ChartType::Garment));
    assert_eq!(n.reasons, vec![ReasonCode::LegacyChartTypeDefault], "emitted once");
}

#[test]
fn bogus_chart_type_fails_naming_value_and_accepted_tags() {
    let c = chart(vec![
        ChartEntry::new(SizeLabel::S).chart_type("garment"),
        ChartEntry::new(SizeLabel::M).chart_type("bogus"),
    ]);
    let body = BodyMeasurementSet::new(Unit::Cm);
    let err = normalize(&body, &c, None, &NormalizeConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidChartType {
            size: SizeLabel::M,
            value: "bogus".to_string()
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("bogus") && msg.contains("'garment'") && msg.contains("'body'"));
}

#[test]
fn chart_type_is_not_coerced() {
    let body = BodyMeasurementSet::new(Unit::Cm);
    for tag in ["Garment", " garment ", "body\n", ""] {
        let c = chart(vec![ChartEntry::new(SizeLabel::M).chart_type(tag)]);
        let err = normalize(&body, &c, None, &NormalizeConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidChartType {
                size: SizeLabel::M,
                value: tag.to_string()
            },
            "{tag:?} must be rejected verbatim"
        );
    }
}

#[test]
fn inches_convert_to_centimeters() {
    let c = GarmentSizeChart::new(
        Unit::Inch,
        vec![ChartEntry::new(SizeLabel::M).with(Metric::Chest, 40.0)],
    )
    .unwrap();
    let body = BodyMeasurementSet::new(Unit::Inch).with(Metric::Chest, 39.0);
    let n = normalize(&body, &c, None, &NormalizeConfig::default()).unwrap();
    assert!((n.body.values_cm[&Metric::Chest] - 99.06).abs() < 1e-9);
    assert!((n.entries[0].values_cm[&Metric::Chest] - 101.6).abs() < 1e-9);
    assert_eq!(n.units.body_unit, Unit::Inch);
    assert_eq!(n.units.target_unit, Unit::Cm);
}

#[test]
fn explicit_height_wins_over_body_height() {
    let body =
        BodyMeasurementSet::from_pairs(Unit::Inch, [("height", Some(72.0))]).unwrap();
    let c = chart(vec![ChartEntry::new(SizeLabel::M)]);
    let cfg = NormalizeConfig::default();

    let from_body = normalize(&body, &c, None, &cfg).unwrap();
    assert!((from_body.body.height_cm.unwrap() - 182.88).abs() < 1e-9);

    let explicit = normalize(&body, &c, Some(190.0), &cfg).unwrap();
    assert_eq!(explicit.body.height_cm, Some(190.0));
}

#[test]
fn rejects_non_positive_height() {
    let c = chart(vec![ChartEntry::new(SizeLabel::M)]);
    let body = BodyMeasurementSet::new(Unit::Cm);
    let err = normalize(&body, &c, Some(0.0), &NormalizeConfig::default()).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidMeasurement { .. }));
}

#[test]
fn half_width_detection_is_opt_in() {
    let c = chart(vec![
        ChartEntry::new(SizeLabel::Xs)
            .with(Metric::Chest, 44.0)
            .with(Metric::Waist, 42.0)
            .with(Metric::ShoulderWidth, 40.0),
    ]);
    let body = BodyMeasurementSet::new(Unit::Cm);

    let off = normalize(&body, &c, None, &NormalizeConfig::default()).unwrap();
    assert_eq!(off.entries[0].values_cm[&Metric::Chest], 44.0);

    let cfg = NormalizeConfig {
        half_width_detection: true,
        ..NormalizeConfig::default()
    };
    let on = normalize(&body, &c, None, &cfg).unwrap();
    let v = &on.entries[0].values_cm;
    assert_eq!(v[&Metric::Chest], 88.0);
    assert_eq!(v[&Metric::Waist], 84.0);
    assert_eq!(v[&Metric::ShoulderWidth], 40.0, "lengths are never doubled");
    assert!(on.reasons.contains(&ReasonCode::HalfWidthDoubled));
}
