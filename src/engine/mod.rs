//! The size-decision pipeline.
//!
//! Normalize -> resolve category -> score every size -> select winner ->
//! enforce guardrail -> compute confidence -> (debug trace) -> return.
//!
//! [`Engine::recommend`] is a pure function of the request and the engine's
//! immutable configuration: no I/O, no shared mutable state, safe to call
//! from any number of threads at once.

use serde::Serialize;
use tracing::{debug, warn};

use crate::category::{CategoryId, CategoryPolicy, FixedCategory, OverlapSwitch};
use crate::chart::GarmentSizeChart;
use crate::confidence;
use crate::config::EngineConfig;
use crate::error::{ConfigError, ValidationError};
use crate::guardrail::{self, FitPreference};
use crate::metric::BodyMeasurementSet;
use crate::normalize;
use crate::reason::{ReasonCode, ReasonCodes};
use crate::score;
use crate::size::SizeLabel;
use crate::trace::{self, DebugPayload, PipelineState};

/// Inputs of one recommendation.
#[derive(Debug, Clone)]
pub struct RecommendRequest {
    pub body: BodyMeasurementSet,
    pub chart: GarmentSizeChart,
    pub category: CategoryId,
    pub fit: FitPreference,
    pub height_cm: Option<f64>,
    pub debug: bool,
}

impl RecommendRequest {
    pub fn new(body: BodyMeasurementSet, chart: GarmentSizeChart, category: CategoryId) -> Self {
        Self {
            body,
            chart,
            category,
            fit: FitPreference::default(),
            height_cm: None,
            debug: false,
        }
    }

    pub fn fit(mut self, fit: FitPreference) -> Self {
        self.fit = fit;
        self
    }

    pub fn height_cm(mut self, height_cm: Option<f64>) -> Self {
        self.height_cm = height_cm;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub recommended_size: SizeLabel,
    pub confidence: f64,
    pub reason_codes: ReasonCodes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugPayload>,
}

#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    policy: Box<dyn CategoryPolicy>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_valid(EngineConfig::default())
    }
}

impl Engine {
    /// Validate `config` and build an engine whose category policy follows
    /// `config.category`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Build an engine with an explicit category policy, ignoring
    /// `config.category`.
    pub fn with_policy(
        config: EngineConfig,
        policy: Box<dyn CategoryPolicy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, policy })
    }

    fn from_valid(config: EngineConfig) -> Self {
        let policy: Box<dyn CategoryPolicy> = if config.category.auto_switch {
            Box::new(OverlapSwitch {
                margin: config.category.switch_margin,
            })
        } else {
            Box::new(FixedCategory)
        };
        Self { config, policy }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn recommend(
        &self,
        req: &RecommendRequest,
    ) -> Result<RecommendationResult, ValidationError> {
        let cfg = &self.config;
        let mut reasons = ReasonCodes::default();
        if req.body.is_empty() {
            warn!("no usable body measurements; every metric scores as missing");
        }

        // Normalized
        let normalized = normalize::normalize(&req.body, &req.chart, req.height_cm, &cfg.normalize)?;
        for r in &normalized.reasons {
            reasons.push(r.clone());
        }

        // CategoryResolved
        let category = self.policy.resolve(req.category, &normalized.body.keys());
        if category.switched() {
            warn!(
                from = %category.requested,
                to = %category.resolved,
                "category switched by metric overlap"
            );
            reasons.push(ReasonCode::CategorySwitched {
                from: category.requested,
                to: category.resolved,
            });
        }
        let profile = category.resolved.profile();

        // Scored
        let scores = score::score_all(&normalized.body, &normalized.entries, profile, &cfg.scoring);

        // Selected
        let winner = score::select_winner(&scores, cfg.scoring.tie_epsilon)
            .ok_or(ValidationError::EmptyChart)?;
        debug!(winner = %winner.size, total = winner.total, "scorer selected size");

        // GuardrailApplied
        let chart_sizes: Vec<SizeLabel> = req.chart.sizes().collect();
        let (decision, guard_reasons) = guardrail::enforce(
            winner.size,
            normalized.body.height_cm,
            req.fit,
            &chart_sizes,
            &cfg.guardrail,
            req.debug,
        );
        for r in guard_reasons {
            reasons.push(r);
        }

        // final_size is always one of chart_sizes, so it has a score.
        let final_score = scores
            .iter()
            .find(|s| s.size == decision.final_size)
            .unwrap_or(winner);
        for metric in final_score.missing_metrics() {
            reasons.push(ReasonCode::MissingMetric(metric));
        }

        // ConfidenceComputed
        let (breakdown, conf_reasons) =
            confidence::compute(final_score, decision.overrode(), &cfg.confidence);
        for r in conf_reasons {
            reasons.push(r);
        }
        debug!(
            size = %decision.final_size,
            confidence = breakdown.value,
            reasons = reasons.len(),
            "recommendation computed"
        );

        // DebugAssembled
        let debug = req.debug.then(|| {
            trace::assemble(&PipelineState {
                normalized: &normalized,
                profile,
                category: &category,
                scores: &scores,
                scorer_winner: winner.size,
                guardrail: &decision,
                confidence: &breakdown,
                reasons: &reasons,
            })
        });

        Ok(RecommendationResult {
            recommended_size: decision.final_size,
            confidence: breakdown.value,
            reason_codes: reasons,
            debug,
        })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties;
