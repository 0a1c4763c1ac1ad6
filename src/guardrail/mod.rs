//! Height-derived minimum size.
//!
//! Tall users get a floor (by default L from 183 cm, XL from 190 cm). The
//! floor can only raise the scorer's pick, never lower it. A tight fit
//! preference turns the floor into advice that is reported but not applied.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::GuardrailConfig;
use crate::reason::ReasonCode;
use crate::size::SizeLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPreference {
    #[default]
    Regular,
    Tight,
}

impl fmt::Display for FitPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Regular => "regular",
            Self::Tight => "tight",
        })
    }
}

impl FromStr for FitPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" | "relaxed" | "loose" => Ok(Self::Regular),
            "tight" | "slim" => Ok(Self::Tight),
            _ => Err(format!("unknown fit preference '{s}': expected 'regular' or 'tight'")),
        }
    }
}

/// What the guardrail did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardrailAction {
    /// No height was available; nothing to enforce.
    HeightUnavailable,
    /// Height is below every floor threshold.
    NoFloor,
    /// The scorer's pick already meets the floor.
    Satisfied,
    /// The pick was raised to the floor.
    Enforced,
    /// Tight fit requested; the floor was reported but not applied.
    Advisory,
}

impl GuardrailAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeightUnavailable => "height_unavailable",
            Self::NoFloor => "no_floor",
            Self::Satisfied => "satisfied",
            Self::Enforced => "enforced",
            Self::Advisory => "advisory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuardrailDecision {
    pub height_cm: Option<f64>,
    pub floor: Option<SizeLabel>,
    pub scorer_winner: SizeLabel,
    pub final_size: SizeLabel,
    pub action: GuardrailAction,
    pub reason: String,
}

impl GuardrailDecision {
    pub fn enforced(&self) -> bool {
        self.action == GuardrailAction::Enforced
    }

    /// The final size differs from the scorer's pick.
    pub fn overrode(&self) -> bool {
        self.final_size != self.scorer_winner
    }
}

/// Highest floor whose threshold `height_cm` reaches.
pub fn floor_for_height(height_cm: f64, cfg: &GuardrailConfig) -> Option<SizeLabel> {
    cfg.floors
        .iter()
        .filter(|f| height_cm >= f.min_height_cm)
        .max_by(|a, b| a.min_height_cm.total_cmp(&b.min_height_cm))
        .map(|f| f.size)
}

/// Apply the height floor to the scorer's pick. `chart_sizes` must be the
/// chart's sizes in ascending order. `HeightUnavailable` is only reported
/// when `report_missing_height` is set.
pub fn enforce(
    scorer_winner: SizeLabel,
    height_cm: Option<f64>,
    fit: FitPreference,
    chart_sizes: &[SizeLabel],
    cfg: &GuardrailConfig,
    report_missing_height: bool,
) -> (GuardrailDecision, Vec<ReasonCode>) {
    let mut reasons = Vec::new();
    let decision = |floor, final_size, action, reason: String| GuardrailDecision {
        height_cm,
        floor,
        scorer_winner,
        final_size,
        action,
        reason,
    };

    let Some(height) = height_cm else {
        if report_missing_height {
            reasons.push(ReasonCode::HeightUnavailable);
        }
        let d = decision(
            None,
            scorer_winner,
            GuardrailAction::HeightUnavailable,
            "height not provided; no floor applied".to_string(),
        );
        return (d, reasons);
    };

    let Some(floor) = floor_for_height(height, cfg) else {
        let d = decision(
            None,
            scorer_winner,
            GuardrailAction::NoFloor,
            format!("height {height:.1} cm is below every floor threshold"),
        );
        return (d, reasons);
    };

    if fit == FitPreference::Tight {
        reasons.push(ReasonCode::TightOverride);
        let d = decision(
            Some(floor),
            scorer_winner,
            GuardrailAction::Advisory,
            format!("tight fit requested; floor {floor} for {height:.1} cm not enforced"),
        );
        return (d, reasons);
    }

    if scorer_winner >= floor {
        let d = decision(
            Some(floor),
            scorer_winner,
            GuardrailAction::Satisfied,
            format!("{scorer_winner} already meets floor {floor} for {height:.1} cm"),
        );
        return (d, reasons);
    }

    // Smallest chart size at or above the floor, else the largest size.
    let target = match chart_sizes.iter().copied().find(|s| *s >= floor) {
        Some(s) => s,
        None => {
            let largest = chart_sizes.last().copied().unwrap_or(scorer_winner);
            warn!(%floor, %largest, "guardrail floor is larger than every chart size");
            reasons.push(ReasonCode::GuardrailFloorUnavailable { floor });
            largest.max(scorer_winner)
        }
    };

    if target == scorer_winner {
        let d = decision(
            Some(floor),
            scorer_winner,
            GuardrailAction::Satisfied,
            format!("{scorer_winner} is the largest chart size; floor {floor} unavailable"),
        );
        return (d, reasons);
    }

    let steps = scorer_winner.steps_to(target);
    info!(from = %scorer_winner, to = %target, steps, height, "guardrail raised size");
    reasons.push(ReasonCode::GuardrailEnforced {
        from: scorer_winner,
        to: target,
        steps,
    });
    let d = decision(
        Some(floor),
        target,
        GuardrailAction::Enforced,
        format!("height {height:.1} cm requires at least {floor}; raised {scorer_winner} to {target}"),
    );
    (d, reasons)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
