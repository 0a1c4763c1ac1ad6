use super::*;

#[test]
fn print_report_does_not_panic() {
    print_report(&ScoringConfig::default());
}

#[test]
fn print_json_does_not_panic() {
    print_json(&ScoringConfig::default()).unwrap();
}

#[test]
fn rows_cover_every_profile_metric() {
    let scoring = ScoringConfig::default();
    let rows = rows(CategoryId::Dress.profile(), &scoring);
    let metrics: Vec<Metric> = rows.iter().map(|r| r.metric).collect();
    assert_eq!(
        metrics,
        vec![Metric::Chest, Metric::Waist, Metric::Hip, Metric::Length]
    );
    assert_eq!(rows[0].role, "critical");
    assert_eq!(rows[0].weight, 1.0);
    assert_eq!(rows[3].role, "secondary");
    assert_eq!(rows[3].weight, 0.5);
}

#[test]
fn lower_body_waist_has_smaller_ease() {
    let scoring = ScoringConfig::default();
    let waist = |id: CategoryId| {
        rows(id.profile(), &scoring)
            .into_iter()
            .find(|r| r.metric == Metric::Waist)
            .map(|r| r.ease_cm)
    };
    assert_eq!(waist(CategoryId::LowerBody), Some(2.0));
    assert_eq!(waist(CategoryId::UpperBody), Some(4.0));
}

#[test]
fn json_lists_deepfashion_ids() {
    let cat = JsonCategory {
        id: CategoryId::LowerBody,
        deepfashion_ids: CategoryId::LowerBody.deepfashion_ids(),
        metrics: vec![],
    };
    let v = serde_json::to_value(&cat).unwrap();
    assert_eq!(v["id"], "lower_body");
    assert_eq!(v["deepfashion_ids"], serde_json::json!([1, 2, 11, 12]));
}
