use super::*;

#[test]
fn names_and_numeric_ids_parse() {
    assert_eq!("upper_body".parse::<CategoryId>().unwrap(), CategoryId::UpperBody);
    assert_eq!("Lower-Body".parse::<CategoryId>().unwrap(), CategoryId::LowerBody);
    assert_eq!("3".parse::<CategoryId>().unwrap(), CategoryId::UpperBody);
    assert_eq!("10".parse::<CategoryId>().unwrap(), CategoryId::UpperBody);
    assert_eq!("11".parse::<CategoryId>().unwrap(), CategoryId::LowerBody);
    assert_eq!("13".parse::<CategoryId>().unwrap(), CategoryId::Dress);
}

#[test]
fn unknown_category_is_a_validation_error() {
    for bad in ["0", "14", "hat", ""] {
        let err = bad.parse::<CategoryId>().unwrap_err();
        assert!(
            matches!(err, ValidationError::UnknownCategory(_)),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn critical_weight_is_twice_secondary() {
    let cfg = ScoringConfig::default();
    let p = CategoryId::UpperBody.profile();
    let c = p.weight(Metric::Chest, &cfg).unwrap();
    let s = p.weight(Metric::SleeveLength, &cfg).unwrap();
    assert!((c - 2.0 * s).abs() < 1e-12);
    assert_eq!(p.weight(Metric::Inseam, &cfg), None);
}

#[test]
fn upper_body_metric_order() {
    let metrics: Vec<_> = CategoryId::UpperBody.profile().metrics().collect();
    assert_eq!(
        metrics,
        vec![
            Metric::Chest,
            Metric::ShoulderWidth,
            Metric::Waist,
            Metric::SleeveLength
        ]
    );
}

#[test]
fn critical_and_secondary_sets_are_disjoint() {
    for id in CategoryId::ALL {
        let p = id.profile();
        assert_eq!(p.id, id);
        for m in p.critical {
            assert!(!p.secondary.contains(m), "{m} is both critical and secondary in {id}");
        }
    }
}

#[test]
fn waist_ease_is_tighter_for_lower_body() {
    assert_eq!(CategoryId::LowerBody.profile().ease_cm(Metric::Waist), 2.0);
    assert_eq!(CategoryId::UpperBody.profile().ease_cm(Metric::Waist), 4.0);
    assert_eq!(CategoryId::Dress.profile().ease_cm(Metric::Chest), 6.0);
}

#[test]
fn deepfashion_ids_partition_one_to_thirteen() {
    for n in 1u32..=13 {
        let owners: Vec<_> = CategoryId::ALL
            .into_iter()
            .filter(|c| c.deepfashion_ids().contains(&n))
            .collect();
        assert_eq!(owners.len(), 1, "id {n}");
        assert_eq!(n.to_string().parse::<CategoryId>().unwrap(), owners[0]);
    }
}
