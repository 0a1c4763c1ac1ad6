//! Machine-readable reason codes attached to every recommendation.
//!
//! The vocabulary is closed: each variant renders to a stable snake_case tag
//! (`code()`), optionally followed by `:detail` in the serialized form.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::category::CategoryId;
use crate::metric::Metric;
use crate::size::SizeLabel;

#[derive(Debug, Clone, PartialEq)]
pub enum ReasonCode {
    /// A chart entry had no `chart_type`; it was read as a garment chart.
    LegacyChartTypeDefault,
    /// Flat half-width girth values were doubled.
    HalfWidthDoubled,
    CategorySwitched { from: CategoryId, to: CategoryId },
    GuardrailEnforced {
        from: SizeLabel,
        to: SizeLabel,
        steps: i32,
    },
    /// The height floor is larger than every size in the chart.
    GuardrailFloorUnavailable { floor: SizeLabel },
    TightOverride,
    HeightUnavailable,
    MissingMetric(Metric),
    GuardrailConfidencePenalty,
    LowConfidence,
    ConfidenceWarning,
}

impl ReasonCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::LegacyChartTypeDefault => "legacy_chart_type_default",
            Self::HalfWidthDoubled => "half_width_doubled",
            Self::CategorySwitched { .. } => "category_switched",
            Self::GuardrailEnforced { .. } => "guardrail_enforced",
            Self::GuardrailFloorUnavailable { .. } => "guardrail_floor_unavailable",
            Self::TightOverride => "tight_override",
            Self::HeightUnavailable => "height_unavailable",
            Self::MissingMetric(_) => "missing_metric",
            Self::GuardrailConfidencePenalty => "guardrail_confidence_penalty",
            Self::LowConfidence => "low_confidence",
            Self::ConfidenceWarning => "confidence_warning",
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            Self::CategorySwitched { from, to } => Some(format!("{from}->{to}")),
            Self::GuardrailEnforced { from, to, steps } => Some(format!("{from}->{to}(+{steps})")),
            Self::GuardrailFloorUnavailable { floor } => Some(floor.to_string()),
            Self::MissingMetric(m) => Some(m.to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(d) => write!(f, "{}:{d}", self.code()),
            None => f.write_str(self.code()),
        }
    }
}

impl Serialize for ReasonCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered reason codes in detection order. Duplicate codes are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReasonCodes(Vec<ReasonCode>);

impl ReasonCodes {
    pub fn push(&mut self, code: ReasonCode) {
        if !self.0.contains(&code) {
            self.0.push(code);
        }
    }

    pub fn has(&self, code: &str) -> bool {
        self.0.iter().any(|r| r.code() == code)
    }

    pub fn missing_metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.0.iter().filter_map(|r| match r {
            ReasonCode::MissingMetric(m) => Some(*m),
            _ => None,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReasonCode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReasonCodes {
    type Item = &'a ReasonCode;
    type IntoIter = std::slice::Iter<'a, ReasonCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "reason_test.rs"]
mod tests;
