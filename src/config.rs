//! Engine configuration.
//!
//! All tunables of the pipeline live in one immutable [`EngineConfig`]
//! passed to [`Engine::new`](crate::engine::Engine::new). Every field has a
//! default, so a TOML file only needs the keys it overrides:
//!
//! ```toml
//! [guardrail]
//! floors = [{ min_height_cm = 180.0, size = "L" }]
//!
//! [confidence]
//! warning_threshold = 0.7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::size::SizeLabel;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub guardrail: GuardrailConfig,
    pub confidence: ConfidenceConfig,
    pub category: CategoryConfig,
    pub normalize: NormalizeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight of a critical metric. Must be twice `secondary_weight`.
    pub critical_weight: f64,
    pub secondary_weight: f64,
    /// Penalty per missing metric, multiplied by the metric's weight.
    pub missing_penalty: f64,
    /// Scores closer than this are a tie.
    pub tie_epsilon: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            critical_weight: 1.0,
            secondary_weight: 0.5,
            missing_penalty: 50.0,
            tie_epsilon: 1e-9,
        }
    }
}

/// A height at or above which `size` is the minimum recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeightFloor {
    pub min_height_cm: f64,
    pub size: SizeLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardrailConfig {
    /// Ascending by `min_height_cm`; the highest matching floor wins.
    pub floors: Vec<HeightFloor>,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            floors: vec![
                HeightFloor {
                    min_height_cm: 183.0,
                    size: SizeLabel::L,
                },
                HeightFloor {
                    min_height_cm: 190.0,
                    size: SizeLabel::Xl,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfidenceConfig {
    /// Total score at which the base confidence reaches zero.
    pub score_scale: f64,
    /// Multiplier applied once per missing critical metric.
    pub missing_critical_factor: f64,
    /// Multiplier applied when the guardrail overrode the scorer.
    pub guardrail_factor: f64,
    /// Below this, `low_confidence` is emitted.
    pub min_threshold: f64,
    /// Below this, `confidence_warning` is emitted.
    pub warning_threshold: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            score_scale: 100.0,
            missing_critical_factor: 0.8,
            guardrail_factor: 0.85,
            min_threshold: 0.35,
            warning_threshold: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryConfig {
    /// Allow the overlap heuristic to replace the requested category.
    pub auto_switch: bool,
    /// Another category must cover more than this many extra body metrics.
    pub switch_margin: usize,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            auto_switch: true,
            switch_margin: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    /// Treat implausibly small girth values as flat half-width measurements.
    pub half_width_detection: bool,
    pub half_width_chest_below_cm: f64,
    pub half_width_waist_below_cm: f64,
    pub half_width_hip_below_cm: f64,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            half_width_detection: false,
            half_width_chest_below_cm: 70.0,
            half_width_waist_below_cm: 55.0,
            half_width_hip_below_cm: 70.0,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        let s = &self.scoring;
        if !(s.secondary_weight > 0.0) || !(s.critical_weight > 0.0) {
            return invalid("scoring weights must be positive".into());
        }
        if (s.critical_weight - 2.0 * s.secondary_weight).abs() > 1e-9 {
            return invalid(format!(
                "critical_weight ({}) must be twice secondary_weight ({})",
                s.critical_weight, s.secondary_weight
            ));
        }
        if !(s.missing_penalty >= 0.0) || !(s.tie_epsilon >= 0.0) {
            return invalid("missing_penalty and tie_epsilon must be non-negative".into());
        }

        if self.guardrail.floors.iter().any(|f| !(f.min_height_cm > 0.0)) {
            return invalid("guardrail floor heights must be positive".into());
        }
        for w in self.guardrail.floors.windows(2) {
            if w[0].min_height_cm >= w[1].min_height_cm {
                return invalid(format!(
                    "guardrail floors must be strictly ascending by height ({} then {})",
                    w[0].min_height_cm, w[1].min_height_cm
                ));
            }
            if w[0].size > w[1].size {
                return invalid(format!(
                    "guardrail floor sizes must not decrease with height ({} then {})",
                    w[0].size, w[1].size
                ));
            }
        }

        let c = &self.confidence;
        let unit = |v: f64| (0.0..=1.0).contains(&v);
        if !unit(c.missing_critical_factor) || !unit(c.guardrail_factor) {
            return invalid("confidence factors must be within [0, 1]".into());
        }
        if !unit(c.min_threshold) || !unit(c.warning_threshold) {
            return invalid("confidence thresholds must be within [0, 1]".into());
        }
        if c.warning_threshold < c.min_threshold {
            return invalid(format!(
                "warning_threshold ({}) must not be below min_threshold ({})",
                c.warning_threshold, c.min_threshold
            ));
        }
        if !(c.score_scale > 0.0) {
            return invalid("score_scale must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
