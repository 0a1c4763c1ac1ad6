//! `sw recommend`: load inputs, run the engine, print the result.

mod report;

use std::error::Error;
use std::fs;
use std::path::Path;

use sizewise::{
    BodyMeasurementSet, Engine, EngineConfig, GarmentSizeChart, RecommendRequest, Unit,
    ValidationError,
};
use tracing::{debug, warn};

use crate::cli::RecommendArgs;
use report::{print_json, print_report};

pub fn run(args: &RecommendArgs) -> Result<(), Box<dyn Error>> {
    let engine = load_engine(args.config.as_deref())?;
    let req = build_request(args)?;
    let result = engine.recommend(&req)?;

    if args.json {
        print_json(&result)?;
    } else {
        print_report(&result);
    }

    Ok(())
}

/// Engine from a config file, or the built-in defaults.
fn load_engine(path: Option<&Path>) -> Result<Engine, Box<dyn Error>> {
    let config = match path {
        Some(p) => EngineConfig::load(p)?,
        None => EngineConfig::default(),
    };
    Ok(Engine::new(config)?)
}

fn build_request(args: &RecommendArgs) -> Result<RecommendRequest, Box<dyn Error>> {
    let body = load_body(&args.body, args.unit)?;
    let chart = load_chart(args, body.unit())?;
    debug!(
        sizes = chart.entries().len(),
        source = %chart.source(),
        "loaded chart"
    );

    Ok(RecommendRequest::new(body, chart, args.category)
        .fit(args.fit)
        .height_cm(args.height)
        .debug(args.debug))
}

/// The brand chart wins over the measured chart unless it has no sizes.
fn load_chart(args: &RecommendArgs, body_unit: Unit) -> Result<GarmentSizeChart, Box<dyn Error>> {
    if let Some(path) = &args.brand_chart {
        match read_chart(path, body_unit) {
            Ok(chart) => return Ok(chart),
            Err(e) if matches!(e.downcast_ref::<ValidationError>(), Some(ValidationError::EmptyChart)) => {
                warn!(path = %path.display(), "brand chart has no sizes, using measured chart");
            }
            Err(e) => return Err(e),
        }
    }
    read_chart(&args.chart, body_unit)
}

fn read_chart(path: &Path, body_unit: Unit) -> Result<GarmentSizeChart, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read chart '{}': {e}", path.display()))?;
    GarmentSizeChart::from_json_str(&text, body_unit)
}

/// `--body` is inline JSON when it looks like an object, a file path otherwise.
fn load_body(arg: &str, unit: Unit) -> Result<BodyMeasurementSet, Box<dyn Error>> {
    let text = if arg.trim_start().starts_with('{') {
        arg.to_string()
    } else {
        fs::read_to_string(arg).map_err(|e| format!("cannot read body '{arg}': {e}"))?
    };
    BodyMeasurementSet::from_json_str(unit, &text)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
