//! Garment size chart: an ordered XS..XXL sequence of per-size measurements.
//!
//! Charts arrive as JSON from the garment-measurement provider in one of
//! three shapes:
//! - an explicit ordered `sizes` array of `{size, chart_type?, measurements}`,
//! - dual-unit `scale_cm` / `scale_in` tables keyed by size label,
//! - a legacy `scale` table plus a chart-level `unit`.
//!
//! The `chart_type` tag is carried through as raw text here; resolving it
//! (and rejecting bad values) is the normalizer's job.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::metric::{Metric, MetricValue, Unit, check_value, json_number};
use crate::size::SizeLabel;

type RawRow = BTreeMap<String, serde_json::Value>;
type RawTable = BTreeMap<String, RawRow>;

/// Which part of the provider payload the chart was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSource {
    Sizes,
    ScaleCm,
    ScaleIn,
    Legacy,
    Manual,
}

impl fmt::Display for ChartSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sizes => "sizes",
            Self::ScaleCm => "scale_cm",
            Self::ScaleIn => "scale_in",
            Self::Legacy => "scale",
            Self::Manual => "manual",
        })
    }
}

/// One row of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub size: SizeLabel,
    /// Raw `chart_type` tag, `None` when the provider omitted it.
    pub chart_type: Option<String>,
    measurements: BTreeMap<Metric, f64>,
}

impl ChartEntry {
    pub fn new(size: SizeLabel) -> Self {
        Self {
            size,
            chart_type: None,
            measurements: BTreeMap::new(),
        }
    }

    pub fn chart_type(mut self, tag: impl Into<String>) -> Self {
        self.chart_type = Some(tag.into());
        self
    }

    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.measurements.insert(metric, value);
        self
    }

    pub fn get(&self, metric: Metric) -> MetricValue {
        MetricValue::from_option(self.measurements.get(&metric).copied())
    }

    pub fn measurements(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.measurements.iter().map(|(m, v)| (*m, *v))
    }
}

/// Ordered per-size garment chart. Entries are strictly ascending by size.
#[derive(Debug, Clone, PartialEq)]
pub struct GarmentSizeChart {
    unit: Unit,
    source: ChartSource,
    entries: Vec<ChartEntry>,
}

impl GarmentSizeChart {
    /// Build a chart from entries already in XS..XXL order.
    pub fn new(unit: Unit, entries: Vec<ChartEntry>) -> Result<Self, ValidationError> {
        Self::build(unit, ChartSource::Manual, entries)
    }

    fn build(
        unit: Unit,
        source: ChartSource,
        entries: Vec<ChartEntry>,
    ) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::EmptyChart);
        }
        for w in entries.windows(2) {
            let (prev, next) = (w[0].size, w[1].size);
            if prev == next {
                return Err(ValidationError::DuplicateSize(next));
            }
            if prev > next {
                return Err(ValidationError::ChartOrder { prev, next });
            }
        }
        Ok(Self {
            unit,
            source,
            entries,
        })
    }

    /// Parse a provider payload, preferring the table in `body_unit` when
    /// the chart carries both centimeter and inch tables.
    pub fn from_json_str(json: &str, body_unit: Unit) -> Result<Self, Box<dyn std::error::Error>> {
        let raw: RawChart = serde_json::from_str(json)?;
        Ok(raw.into_chart(body_unit)?)
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn source(&self) -> ChartSource {
        self.source
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn sizes(&self) -> impl Iterator<Item = SizeLabel> + '_ {
        self.entries.iter().map(|e| e.size)
    }

    pub fn get(&self, size: SizeLabel) -> Option<&ChartEntry> {
        self.entries.iter().find(|e| e.size == size)
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    size: String,
    #[serde(default)]
    chart_type: Option<String>,
    #[serde(default)]
    measurements: RawRow,
}

#[derive(Debug, Deserialize)]
struct RawChart {
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    chart_type: Option<String>,
    #[serde(default)]
    sizes: Option<Vec<RawEntry>>,
    #[serde(default)]
    scale_cm: Option<RawTable>,
    #[serde(default)]
    scale_in: Option<RawTable>,
    #[serde(default)]
    scale: Option<RawTable>,
}

impl RawChart {
    fn into_chart(self, body_unit: Unit) -> Result<GarmentSizeChart, ValidationError> {
        let chart_type = self.chart_type;
        let declared_unit = self.unit.as_deref().map(str::parse::<Unit>).transpose()?;

        if let Some(sizes) = self.sizes {
            let entries = sizes
                .into_iter()
                .map(|e| {
                    let size = e.size.parse::<SizeLabel>()?;
                    let tag = e.chart_type.or_else(|| chart_type.clone());
                    entry_from_raw(size, tag, &e.measurements)
                })
                .collect::<Result<Vec<_>, _>>()?;
            return GarmentSizeChart::build(
                declared_unit.unwrap_or_default(),
                ChartSource::Sizes,
                entries,
            );
        }

        let (unit, source, table) = match (body_unit, self.scale_cm, self.scale_in) {
            (Unit::Inch, _, Some(t)) => (Unit::Inch, ChartSource::ScaleIn, t),
            (_, Some(t), _) => (Unit::Cm, ChartSource::ScaleCm, t),
            (_, None, Some(t)) => (Unit::Inch, ChartSource::ScaleIn, t),
            (_, None, None) => match self.scale {
                Some(t) => (declared_unit.unwrap_or_default(), ChartSource::Legacy, t),
                None => return Err(ValidationError::EmptyChart),
            },
        };
        debug!(%source, %unit, "selected chart table");

        // Map-shaped tables carry no order of their own: sort by label.
        let mut entries = table
            .iter()
            .map(|(label, metrics)| {
                let size = label.parse::<SizeLabel>()?;
                entry_from_raw(size, chart_type.clone(), metrics)
            })
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|e| e.size);
        GarmentSizeChart::build(unit, source, entries)
    }
}

fn entry_from_raw(
    size: SizeLabel,
    chart_type: Option<String>,
    metrics: &RawRow,
) -> Result<ChartEntry, ValidationError> {
    let mut entry = ChartEntry::new(size);
    entry.chart_type = chart_type;
    for (key, raw) in metrics {
        let Some(metric) = Metric::from_key(key) else {
            debug!(%size, key = key.as_str(), "ignoring unknown chart measurement");
            continue;
        };
        // Provider rows mix numbers with notes; only numbers are measurements.
        let Some(value) = json_number(raw, false) else {
            if !raw.is_null() {
                debug!(%size, %metric, "ignoring non-numeric chart measurement");
            }
            continue;
        };
        entry.measurements.insert(metric, check_value(key, value)?);
    }
    Ok(entry)
}

#[cfg(test)]
#[path = "chart_test.rs"]
mod tests;
