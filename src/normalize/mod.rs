//! Measurement normalization: first stage of the pipeline.
//!
//! Converts body and chart values to centimeters, resolves each chart
//! entry's `chart_type`, and (optionally) undoes flat half-width girth
//! measurements. Bare-body charts receive their category ease when the
//! scorer reads them through [`NormalizedEntry::garment`], once the
//! category is known.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::category::CategoryProfile;
use crate::chart::{ChartSource, GarmentSizeChart};
use crate::config::NormalizeConfig;
use crate::error::ValidationError;
use crate::metric::{BodyMeasurementSet, Metric, MetricValue, Unit, check_value};
use crate::reason::ReasonCode;
use crate::size::SizeLabel;

/// What a chart's numbers describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Finished-garment dimensions; compared as-is.
    Garment,
    /// Bare-body dimensions; ease is added before comparison.
    Body,
}

impl ChartType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Garment => "garment",
            Self::Body => "body",
        }
    }

    /// Resolve a raw tag, matched exactly. `None` defaults to garment and
    /// reports `true`.
    fn resolve(size: SizeLabel, raw: Option<&str>) -> Result<(Self, bool), ValidationError> {
        match raw {
            None => Ok((Self::Garment, true)),
            Some("garment") => Ok((Self::Garment, false)),
            Some("body") => Ok((Self::Body, false)),
            Some(other) => Err(ValidationError::InvalidChartType {
                size,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body measurements in centimeters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedBody {
    pub values_cm: BTreeMap<Metric, f64>,
    pub height_cm: Option<f64>,
}

impl NormalizedBody {
    pub fn get(&self, metric: Metric) -> MetricValue {
        MetricValue::from_option(self.values_cm.get(&metric).copied())
    }

    pub fn keys(&self) -> Vec<Metric> {
        self.values_cm.keys().copied().collect()
    }
}

/// One chart entry in centimeters with its resolved chart type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEntry {
    pub size: SizeLabel,
    pub chart_type: ChartType,
    /// `chart_type` was absent and defaulted to garment.
    pub defaulted: bool,
    pub values_cm: BTreeMap<Metric, f64>,
}

impl NormalizedEntry {
    /// Finished-garment value for `metric` under `profile`: body charts get
    /// the category ease added, garment charts are returned unchanged.
    pub fn garment(&self, metric: Metric, profile: &CategoryProfile) -> MetricValue {
        match self.values_cm.get(&metric) {
            None => MetricValue::Missing,
            Some(&v) => match self.chart_type {
                ChartType::Garment => MetricValue::Present(v),
                ChartType::Body => MetricValue::Present(v + profile.ease_cm(metric)),
            },
        }
    }
}

/// Units observed at the normalizer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitReport {
    pub body_unit: Unit,
    pub chart_unit: Unit,
    pub chart_source: ChartSource,
    pub target_unit: Unit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    pub body: NormalizedBody,
    pub entries: Vec<NormalizedEntry>,
    pub units: UnitReport,
    pub reasons: Vec<ReasonCode>,
}

/// Normalize a request. `height_cm` takes precedence over a `height` key in
/// the body set. Fails on the first invalid `chart_type`.
pub fn normalize(
    body: &BodyMeasurementSet,
    chart: &GarmentSizeChart,
    height_cm: Option<f64>,
    cfg: &NormalizeConfig,
) -> Result<NormalizedInput, ValidationError> {
    let mut reasons = Vec::new();

    if let Some(h) = height_cm
        && !(h.is_finite() && h > 0.0)
    {
        return Err(ValidationError::InvalidMeasurement {
            metric: "height_cm".to_string(),
            value: h,
        });
    }

    let body_unit = body.unit();
    let normalized_body = NormalizedBody {
        values_cm: body
            .metrics()
            .map(|(m, v)| check_value(m.as_str(), v).map(|v| (m, body_unit.to_cm(v))))
            .collect::<Result<_, _>>()?,
        height_cm: height_cm.or_else(|| body.height().map(|h| body_unit.to_cm(h))),
    };

    let chart_unit = chart.unit();
    let mut entries = Vec::with_capacity(chart.entries().len());
    let mut any_defaulted = false;
    let mut any_doubled = false;
    for entry in chart.entries() {
        let (chart_type, defaulted) = ChartType::resolve(entry.size, entry.chart_type.as_deref())?;
        any_defaulted |= defaulted;

        let mut values_cm = BTreeMap::new();
        for (metric, raw) in entry.measurements() {
            let mut cm = chart_unit.to_cm(check_value(metric.as_str(), raw)?);
            if cfg.half_width_detection && is_half_width(metric, cm, cfg) {
                debug!(size = %entry.size, %metric, cm, "doubling half-width measurement");
                cm *= 2.0;
                any_doubled = true;
            }
            values_cm.insert(metric, cm);
        }

        entries.push(NormalizedEntry {
            size: entry.size,
            chart_type,
            defaulted,
            values_cm,
        });
    }

    if any_defaulted {
        reasons.push(ReasonCode::LegacyChartTypeDefault);
    }
    if any_doubled {
        reasons.push(ReasonCode::HalfWidthDoubled);
    }

    debug!(
        body_metrics = normalized_body.values_cm.len(),
        sizes = entries.len(),
        %body_unit,
        %chart_unit,
        "normalized"
    );

    Ok(NormalizedInput {
        body: normalized_body,
        entries,
        units: UnitReport {
            body_unit,
            chart_unit,
            chart_source: chart.source(),
            target_unit: Unit::Cm,
        },
        reasons,
    })
}

fn is_half_width(metric: Metric, cm: f64, cfg: &NormalizeConfig) -> bool {
    match metric {
        Metric::Chest => cm < cfg.half_width_chest_below_cm,
        Metric::Waist => cm < cfg.half_width_waist_below_cm,
        Metric::Hip => cm < cfg.half_width_hip_below_cm,
        _ => false,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
