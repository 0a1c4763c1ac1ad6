//! Weighted distance scoring of every candidate size.
//!
//! For each size and each metric of the resolved category:
//! - both values present: `|garment - body| * weight` is added to the score;
//! - either value absent: `missing_penalty * weight` is added instead and the
//!   metric is recorded as missing.
//!
//! Lower totals are better. A missing metric always costs something, so a
//! sparse measurement set can never look like a perfect match.

use serde::Serialize;

use crate::category::CategoryProfile;
use crate::config::ScoringConfig;
use crate::metric::{Metric, MetricValue};
use crate::normalize::{NormalizedBody, NormalizedEntry};
use crate::size::SizeLabel;

/// Which side of the comparison lacked a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSide {
    Body,
    Garment,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricOutcome {
    Measured {
        body_cm: f64,
        garment_cm: f64,
        /// `garment - body`; positive means the garment is larger.
        delta: f64,
        contribution: f64,
    },
    Missing {
        side: MissingSide,
        penalty: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricScore {
    pub metric: Metric,
    pub critical: bool,
    pub weight: f64,
    pub outcome: MetricOutcome,
}

impl MetricScore {
    pub fn is_missing(&self) -> bool {
        matches!(self.outcome, MetricOutcome::Missing { .. })
    }
}

/// Full scoring breakdown for one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub size: SizeLabel,
    pub metrics: Vec<MetricScore>,
    pub missing_count: usize,
    /// Sum of weighted absolute deltas over measured metrics.
    pub fit_score: f64,
    pub missing_penalty: f64,
    pub total: f64,
}

impl ScoreResult {
    pub fn missing_metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.metrics.iter().filter(|m| m.is_missing()).map(|m| m.metric)
    }

    pub fn missing_critical(&self) -> impl Iterator<Item = Metric> + '_ {
        self.metrics
            .iter()
            .filter(|m| m.critical && m.is_missing())
            .map(|m| m.metric)
    }

    pub fn delta(&self, metric: Metric) -> Option<f64> {
        self.metrics.iter().find(|m| m.metric == metric).and_then(|m| match m.outcome {
            MetricOutcome::Measured { delta, .. } => Some(delta),
            MetricOutcome::Missing { .. } => None,
        })
    }
}

/// Score one chart entry against the body.
pub fn score_size(
    body: &NormalizedBody,
    entry: &NormalizedEntry,
    profile: &CategoryProfile,
    cfg: &ScoringConfig,
) -> ScoreResult {
    let mut metrics = Vec::new();
    let mut fit_score = 0.0;
    let mut missing_penalty = 0.0;

    for metric in profile.metrics() {
        let critical = profile.is_critical(metric);
        let weight = if critical {
            cfg.critical_weight
        } else {
            cfg.secondary_weight
        };

        let outcome = match (body.get(metric), entry.garment(metric, profile)) {
            (MetricValue::Present(b), MetricValue::Present(g)) => {
                let delta = g - b;
                let contribution = delta.abs() * weight;
                fit_score += contribution;
                MetricOutcome::Measured {
                    body_cm: b,
                    garment_cm: g,
                    delta,
                    contribution,
                }
            }
            (b, g) => {
                let side = match (b, g) {
                    (MetricValue::Missing, MetricValue::Missing) => MissingSide::Both,
                    (MetricValue::Missing, _) => MissingSide::Body,
                    _ => MissingSide::Garment,
                };
                let penalty = cfg.missing_penalty * weight;
                missing_penalty += penalty;
                MetricOutcome::Missing { side, penalty }
            }
        };
        metrics.push(MetricScore {
            metric,
            critical,
            weight,
            outcome,
        });
    }

    let missing_count = metrics.iter().filter(|m| m.is_missing()).count();
    ScoreResult {
        size: entry.size,
        metrics,
        missing_count,
        fit_score,
        missing_penalty,
        total: fit_score + missing_penalty,
    }
}

/// Score every size, in chart order.
pub fn score_all(
    body: &NormalizedBody,
    entries: &[NormalizedEntry],
    profile: &CategoryProfile,
    cfg: &ScoringConfig,
) -> Vec<ScoreResult> {
    entries
        .iter()
        .map(|e| score_size(body, e, profile, cfg))
        .collect()
}

/// Lowest total wins. Totals within `epsilon` of each other tie, and ties go
/// to the larger size. Returns `None` only for an empty slice.
pub fn select_winner(scores: &[ScoreResult], epsilon: f64) -> Option<&ScoreResult> {
    let mut best: Option<&ScoreResult> = None;
    for s in scores {
        best = match best {
            None => Some(s),
            Some(b) if s.total < b.total - epsilon => Some(s),
            Some(b) if (s.total - b.total).abs() <= epsilon && s.size > b.size => Some(s),
            keep => keep,
        };
    }
    best
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
