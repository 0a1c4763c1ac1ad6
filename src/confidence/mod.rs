//! Confidence in the final recommendation, in [0, 1].
//!
//! `base = 1 - min(1, total / score_scale)` for the final size, then one
//! multiplicative factor per missing critical metric and one for a guardrail
//! override. Low values are annotated with reason codes; the engine never
//! rejects a request for low confidence.

use serde::Serialize;

use crate::config::ConfidenceConfig;
use crate::metric::Metric;
use crate::reason::ReasonCode;
use crate::score::ScoreResult;

/// One multiplicative adjustment applied to the base confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfidenceFactor {
    MissingCritical { metric: Metric, multiplier: f64 },
    GuardrailOverride { multiplier: f64 },
}

impl ConfidenceFactor {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::MissingCritical { multiplier, .. } | Self::GuardrailOverride { multiplier } => {
                *multiplier
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceBreakdown {
    pub total_score: f64,
    pub base: f64,
    pub factors: Vec<ConfidenceFactor>,
    pub value: f64,
}

/// Compute confidence for the final size's score. `guardrail_overrode` is
/// true when the final size differs from the scorer's pick.
pub fn compute(
    final_score: &ScoreResult,
    guardrail_overrode: bool,
    cfg: &ConfidenceConfig,
) -> (ConfidenceBreakdown, Vec<ReasonCode>) {
    let mut reasons = Vec::new();
    let total_score = final_score.total;
    let base = 1.0 - (total_score / cfg.score_scale).min(1.0);

    let mut factors: Vec<ConfidenceFactor> = final_score
        .missing_critical()
        .map(|metric| ConfidenceFactor::MissingCritical {
            metric,
            multiplier: cfg.missing_critical_factor,
        })
        .collect();
    if guardrail_overrode {
        factors.push(ConfidenceFactor::GuardrailOverride {
            multiplier: cfg.guardrail_factor,
        });
        reasons.push(ReasonCode::GuardrailConfidencePenalty);
    }

    let value = factors
        .iter()
        .fold(base, |acc, f| acc * f.multiplier())
        .clamp(0.0, 1.0);

    if value < cfg.min_threshold {
        reasons.push(ReasonCode::LowConfidence);
    }
    if value < cfg.warning_threshold {
        reasons.push(ReasonCode::ConfidenceWarning);
    }

    let breakdown = ConfidenceBreakdown {
        total_score,
        base,
        factors,
        value,
    };
    (breakdown, reasons)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
