use super::*;

#[test]
fn aliases_canonicalize() {
    assert_eq!(Metric::from_key("hips"), Some(Metric::Hip));
    assert_eq!(Metric::from_key("Bust"), Some(Metric::Chest));
    assert_eq!(
        Metric::from_key("shoulder_to_shoulder"),
        Some(Metric::ShoulderWidth)
    );
    assert_eq!(Metric::from_key("arm-length"), Some(Metric::SleeveLength));
    assert_eq!(Metric::from_key("neck"), None);
}

#[test]
fn unit_parse_and_convert() {
    assert_eq!("inches".parse::<Unit>().unwrap(), Unit::Inch);
    assert_eq!("CM".parse::<Unit>().unwrap(), Unit::Cm);
    assert!("furlong".parse::<Unit>().is_err());
    assert!((Unit::Inch.to_cm(40.0) - 101.6).abs() < 1e-9);
    assert!((Unit::Cm.to_cm(40.0) - 40.0).abs() < 1e-9);
}

#[test]
fn from_pairs_extracts_height_and_skips_unknown() {
    let set = BodyMeasurementSet::from_pairs(
        Unit::Cm,
        [
            ("chest", Some(100.0)),
            ("height", Some(185.0)),
            ("neck", Some(40.0)),
            ("waist", None),
        ],
    )
    .unwrap();
    assert_eq!(set.get(Metric::Chest), MetricValue::Present(100.0));
    assert_eq!(set.get(Metric::Waist), MetricValue::Missing);
    assert_eq!(set.height(), Some(185.0));
    assert_eq!(set.keys().count(), 1, "neck and height are not metrics");
}

#[test]
fn from_pairs_rejects_negative_values() {
    let err = BodyMeasurementSet::from_pairs(Unit::Cm, [("chest", Some(-3.0))]).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidMeasurement { ref metric, .. } if metric == "chest"));
}

#[test]
fn from_json_str_accepts_nulls() {
    let set =
        BodyMeasurementSet::from_json_str(Unit::Inch, r#"{"chest": 40, "hips": null}"#).unwrap();
    assert_eq!(set.unit(), Unit::Inch);
    assert_eq!(set.get(Metric::Chest), MetricValue::Present(40.0));
    assert_eq!(set.get(Metric::Hip), MetricValue::Missing);
}

#[test]
fn unknown_keys_are_not_validated() {
    let set = BodyMeasurementSet::from_pairs(
        Unit::Cm,
        [("chest", Some(100.0)), ("neck", Some(0.0)), ("age", Some(-1.0))],
    )
    .unwrap();
    assert_eq!(set.get(Metric::Chest), MetricValue::Present(100.0));
    assert_eq!(set.keys().count(), 1);
}

#[test]
fn from_json_str_skips_non_numeric_fields() {
    let set = BodyMeasurementSet::from_json_str(
        Unit::Cm,
        r#"{"chest": 100, "waist": "85", "gender": "male", "hip": "n/a", "notes": {"a": 1}}"#,
    )
    .unwrap();
    assert_eq!(set.get(Metric::Chest), MetricValue::Present(100.0));
    assert_eq!(set.get(Metric::Waist), MetricValue::Present(85.0), "numeric text is parsed");
    assert_eq!(set.get(Metric::Hip), MetricValue::Missing);
    assert_eq!(set.keys().count(), 2);
}

#[test]
fn from_json_str_still_rejects_bad_known_values() {
    let err = BodyMeasurementSet::from_json_str(Unit::Cm, r#"{"chest": 0}"#).unwrap_err();
    assert!(err.to_string().contains("chest"), "{err}");
}
