use serde::Serialize;
use sizewise::category::CategoryProfile;
use sizewise::config::ScoringConfig;
use sizewise::{CategoryId, Metric};

use crate::report_helpers;

/// Print every category profile with its metrics, weights and ease.
pub fn print_report(scoring: &ScoringConfig) {
    let separator = report_helpers::separator(66);

    println!("Category Profiles");
    println!("{separator}");
    println!(
        " {:<12} {:<16} {:<10} {:>6}   {:>7}",
        "Category", "Metric", "Role", "Weight", "Ease cm"
    );
    println!("{separator}");

    for id in CategoryId::ALL {
        for row in rows(id.profile(), scoring) {
            println!(
                " {:<12} {:<16} {:<10} {:>6.2}   {:>7.1}",
                id.as_str(),
                row.metric.as_str(),
                row.role,
                row.weight,
                row.ease_cm,
            );
        }
        let ids: Vec<String> = id.deepfashion_ids().iter().map(u32::to_string).collect();
        println!(" {:<12} DeepFashion2 ids: {}", "", ids.join(", "));
        println!("{separator}");
    }
}

/// JSON-serializable representation of one metric of a profile.
#[derive(Serialize)]
struct JsonMetric {
    metric: Metric,
    role: &'static str,
    weight: f64,
    ease_cm: f64,
}

/// JSON-serializable representation of a category profile.
#[derive(Serialize)]
struct JsonCategory {
    id: CategoryId,
    deepfashion_ids: &'static [u32],
    metrics: Vec<JsonMetric>,
}

fn rows(profile: &CategoryProfile, scoring: &ScoringConfig) -> Vec<JsonMetric> {
    profile
        .metrics()
        .filter_map(|metric| {
            let weight = profile.weight(metric, scoring)?;
            Some(JsonMetric {
                metric,
                role: if profile.is_critical(metric) {
                    "critical"
                } else {
                    "secondary"
                },
                weight,
                ease_cm: profile.ease_cm(metric),
            })
        })
        .collect()
}

/// Serialize every category profile to pretty-printed JSON and print to stdout.
pub fn print_json(scoring: &ScoringConfig) -> Result<(), Box<dyn std::error::Error>> {
    let categories: Vec<JsonCategory> = CategoryId::ALL
        .into_iter()
        .map(|id| JsonCategory {
            id,
            deepfashion_ids: id.deepfashion_ids(),
            metrics: rows(id.profile(), scoring),
        })
        .collect();
    report_helpers::print_json_stdout(&categories)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
