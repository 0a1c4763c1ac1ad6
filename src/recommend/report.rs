use sizewise::RecommendationResult;
use sizewise::score::ScoreResult;
use sizewise::trace::DebugPayload;

use crate::report_helpers::{self, format_cm, join_metrics};

/// Coarse label for the confidence value, read off the reason codes.
fn confidence_label(result: &RecommendationResult) -> &'static str {
    if result.reason_codes.has("low_confidence") {
        "low"
    } else if result.reason_codes.has("confidence_warning") {
        "warning"
    } else {
        "ok"
    }
}

/// Print the recommendation as a formatted table. The per-size breakdown is
/// shown only when the result carries a debug trace.
pub fn print_report(result: &RecommendationResult) {
    let separator = report_helpers::separator(66);

    println!("Size Recommendation");
    println!("{separator}");
    println!(" Recommended Size: {}", result.recommended_size);
    println!(
        " Confidence:       {:.2} ({})",
        result.confidence,
        confidence_label(result)
    );
    println!("{separator}");

    if result.reason_codes.is_empty() {
        println!(" Reason Codes:     (none)");
    } else {
        println!(" Reason Codes");
        for r in &result.reason_codes {
            println!("   {r}");
        }
    }
    println!("{separator}");

    if let Some(d) = &result.debug {
        print_trace(d, &separator);
    }
}

fn print_trace(d: &DebugPayload, separator: &str) {
    println!();
    println!(" Decision Trace");
    println!("{separator}");
    println!(
        " Units:     body {} / chart {} (from {}) -> {}",
        d.units.body_unit, d.units.chart_unit, d.units.chart_source, d.units.target_unit
    );
    if d.category.switched() {
        println!(
            " Category:  {} (requested {})",
            d.category.resolved, d.category.requested
        );
    } else {
        println!(" Category:  {}", d.category.resolved);
    }
    println!(
        " Body (cm): {}",
        d.body_cm
            .values_cm
            .iter()
            .map(|(m, v)| format!("{m}={v:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!(" Height:    {} cm", format_cm(d.body_cm.height_cm));
    println!("{separator}");

    println!(
        "   {:<4} {:<8} {:>8} {:>8} {:>8}   Missing",
        "Size", "Type", "Fit", "Penalty", "Total"
    );
    println!("{separator}");
    for (s, trace) in d.scores.iter().zip(&d.sizes) {
        println!(
            " {} {:<4} {:<8} {:>8.2} {:>8.2} {:>8.2}   {}",
            marker(s, d),
            s.size.as_str(),
            trace.chart_type.as_str(),
            s.fit_score,
            s.missing_penalty,
            s.total,
            join_metrics(s.missing_metrics()),
        );
    }
    println!("{separator}");
    println!(" * scorer pick   > final size");
    println!();

    let g = &d.guardrail;
    println!(
        " Guardrail: {} (floor {})",
        g.action.as_str(),
        g.floor.map_or_else(|| "-".to_string(), |f| f.to_string())
    );
    println!("   {}", g.reason);
    println!(
        " Confidence: base {:.3} x {} factor(s) = {:.3}",
        d.confidence.base,
        d.confidence.factors.len(),
        d.confidence.value
    );
    println!("{separator}");
}

fn marker(s: &ScoreResult, d: &DebugPayload) -> char {
    match (s.size == d.scorer_winner, s.size == d.guardrail.final_size) {
        (_, true) => '>',
        (true, false) => '*',
        _ => ' ',
    }
}

/// Serialize the recommendation to pretty-printed JSON and print to stdout.
pub fn print_json(result: &RecommendationResult) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(result)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
