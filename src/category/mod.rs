pub mod resolver;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::error::ValidationError;
use crate::metric::Metric;

pub use resolver::{CategoryPolicy, CategoryResolution, FixedCategory, OverlapSwitch};

/// Garment category a request is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    UpperBody,
    LowerBody,
    Dress,
}

impl CategoryId {
    pub const ALL: [CategoryId; 3] = [Self::UpperBody, Self::LowerBody, Self::Dress];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpperBody => "upper_body",
            Self::LowerBody => "lower_body",
            Self::Dress => "dress",
        }
    }

    /// DeepFashion2 category ids that map onto this profile.
    pub fn deepfashion_ids(self) -> &'static [u32] {
        match self {
            Self::UpperBody => &[3, 4, 5, 6, 7, 8, 9, 10],
            Self::LowerBody => &[1, 2, 11, 12],
            Self::Dress => &[13],
        }
    }

    pub fn profile(self) -> &'static CategoryProfile {
        match self {
            Self::UpperBody => &UPPER_BODY,
            Self::LowerBody => &LOWER_BODY,
            Self::Dress => &DRESS,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = ValidationError;

    /// Accepts the profile names and DeepFashion2 numeric category ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "upper_body" | "upper" | "top" => return Ok(Self::UpperBody),
            "lower_body" | "lower" | "bottom" => return Ok(Self::LowerBody),
            "dress" => return Ok(Self::Dress),
            _ => {}
        }
        key.parse::<u32>()
            .ok()
            .and_then(|n| Self::ALL.into_iter().find(|c| c.deepfashion_ids().contains(&n)))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Metric key-set of a category. Critical metrics weigh twice as much as
/// secondary ones.
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryProfile {
    pub id: CategoryId,
    pub critical: &'static [Metric],
    pub secondary: &'static [Metric],
}

const UPPER_BODY: CategoryProfile = CategoryProfile {
    id: CategoryId::UpperBody,
    critical: &[Metric::Chest, Metric::ShoulderWidth],
    secondary: &[Metric::Waist, Metric::SleeveLength],
};

const LOWER_BODY: CategoryProfile = CategoryProfile {
    id: CategoryId::LowerBody,
    critical: &[Metric::Waist, Metric::Hip],
    secondary: &[Metric::Inseam, Metric::Thigh],
};

const DRESS: CategoryProfile = CategoryProfile {
    id: CategoryId::Dress,
    critical: &[Metric::Chest, Metric::Waist, Metric::Hip],
    secondary: &[Metric::Length],
};

impl CategoryProfile {
    /// Critical metrics first, then secondary, in table order.
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.critical.iter().chain(self.secondary).copied()
    }

    pub fn is_critical(&self, metric: Metric) -> bool {
        self.critical.contains(&metric)
    }

    pub fn weight(&self, metric: Metric, scoring: &ScoringConfig) -> Option<f64> {
        if self.critical.contains(&metric) {
            Some(scoring.critical_weight)
        } else if self.secondary.contains(&metric) {
            Some(scoring.secondary_weight)
        } else {
            None
        }
    }

    /// Finished-garment allowance over bare-body dimensions, in cm.
    pub fn ease_cm(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Chest => 6.0,
            Metric::Waist if self.id == CategoryId::LowerBody => 2.0,
            Metric::Waist => 4.0,
            Metric::Hip => 4.0,
            Metric::ShoulderWidth => 1.5,
            Metric::Thigh => 2.0,
            Metric::Inseam | Metric::SleeveLength | Metric::Length => 1.0,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
