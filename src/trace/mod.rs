//! Decision trace for debug output.
//!
//! A read-only projection of pipeline state that has already been computed.
//! Building it never feeds back into the recommendation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::{CategoryProfile, CategoryResolution};
use crate::confidence::ConfidenceBreakdown;
use crate::guardrail::GuardrailDecision;
use crate::metric::{Metric, MetricValue};
use crate::normalize::{ChartType, NormalizedBody, NormalizedInput, UnitReport};
use crate::reason::ReasonCodes;
use crate::score::ScoreResult;
use crate::size::SizeLabel;

/// Resolved chart semantics and comparable garment values for one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeTrace {
    pub size: SizeLabel,
    pub chart_type: ChartType,
    pub chart_type_defaulted: bool,
    /// Values after unit conversion and ease, for the resolved category.
    pub garment_cm: BTreeMap<Metric, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugPayload {
    pub units: UnitReport,
    pub category: CategoryResolution,
    pub body_cm: NormalizedBody,
    pub sizes: Vec<SizeTrace>,
    pub scores: Vec<ScoreResult>,
    pub scorer_winner: SizeLabel,
    pub guardrail: GuardrailDecision,
    pub confidence: ConfidenceBreakdown,
    pub reason_codes: ReasonCodes,
}

/// Borrowed view of everything the pipeline computed.
pub struct PipelineState<'a> {
    pub normalized: &'a NormalizedInput,
    pub profile: &'static CategoryProfile,
    pub category: &'a CategoryResolution,
    pub scores: &'a [ScoreResult],
    pub scorer_winner: SizeLabel,
    pub guardrail: &'a GuardrailDecision,
    pub confidence: &'a ConfidenceBreakdown,
    pub reasons: &'a ReasonCodes,
}

pub fn assemble(state: &PipelineState<'_>) -> DebugPayload {
    let sizes = state
        .normalized
        .entries
        .iter()
        .map(|e| SizeTrace {
            size: e.size,
            chart_type: e.chart_type,
            chart_type_defaulted: e.defaulted,
            garment_cm: e
                .values_cm
                .keys()
                .filter_map(|&m| match e.garment(m, state.profile) {
                    MetricValue::Present(v) => Some((m, v)),
                    MetricValue::Missing => None,
                })
                .collect(),
        })
        .collect();

    DebugPayload {
        units: state.normalized.units,
        category: state.category.clone(),
        body_cm: state.normalized.body.clone(),
        sizes,
        scores: state.scores.to_vec(),
        scorer_winner: state.scorer_winner,
        guardrail: state.guardrail.clone(),
        confidence: state.confidence.clone(),
        reason_codes: state.reasons.clone(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
