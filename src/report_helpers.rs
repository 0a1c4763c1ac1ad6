use serde::Serialize;
use sizewise::Metric;

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an optional centimeter value, `-` when absent.
pub fn format_cm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

/// Comma-separated metric names.
pub fn join_metrics(metrics: impl IntoIterator<Item = Metric>) -> String {
    metrics
        .into_iter()
        .map(Metric::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
