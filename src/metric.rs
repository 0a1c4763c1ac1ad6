//! Measurement vocabulary: metric names, units, and the caller-owned body
//! measurement set.
//!
//! Every lookup goes through [`MetricValue`], so consumers always handle
//! both the present and the missing arm explicitly.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;

pub const CM_PER_INCH: f64 = 2.54;

/// A named body or garment dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Chest,
    Waist,
    Hip,
    ShoulderWidth,
    SleeveLength,
    Inseam,
    Thigh,
    Length,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Waist => "waist",
            Self::Hip => "hip",
            Self::ShoulderWidth => "shoulder_width",
            Self::SleeveLength => "sleeve_length",
            Self::Inseam => "inseam",
            Self::Thigh => "thigh",
            Self::Length => "length",
        }
    }

    /// Canonicalize a measurement key, accepting the aliases measurement
    /// providers commonly emit. Returns `None` for keys outside the vocabulary.
    pub fn from_key(key: &str) -> Option<Metric> {
        let k = key.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let m = match k.as_str() {
            "chest" | "bust" => Self::Chest,
            "waist" => Self::Waist,
            "hip" | "hips" => Self::Hip,
            "shoulder_width" | "shoulder" | "shoulders" | "shoulder_to_shoulder" => {
                Self::ShoulderWidth
            }
            "sleeve_length" | "sleeve" | "arm_length" => Self::SleeveLength,
            "inseam" => Self::Inseam,
            "thigh" => Self::Thigh,
            "length" | "body_length" => Self::Length,
            _ => return None,
        };
        Some(m)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-armed outcome of a metric lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Present(f64),
    Missing,
}

impl MetricValue {
    pub fn from_option(v: Option<f64>) -> Self {
        match v {
            Some(x) => Self::Present(x),
            None => Self::Missing,
        }
    }
}

/// Unit a caller's numbers are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Cm,
    Inch,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Inch => "inch",
        }
    }

    pub fn to_cm(self, value: f64) -> f64 {
        match self {
            Self::Cm => value,
            Self::Inch => value * CM_PER_INCH,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(Self::Cm),
            "in" | "inch" | "inches" => Ok(Self::Inch),
            _ => Err(ValidationError::UnknownUnit(s.to_string())),
        }
    }
}

/// Validate a raw measurement value: finite and strictly positive.
pub(crate) fn check_value(key: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidMeasurement {
            metric: key.to_string(),
            value,
        })
    }
}

/// Read a raw JSON measurement. Numbers pass through; with `parse_text`,
/// numeric strings are parsed too. Anything else reads as absent.
pub(crate) fn json_number(value: &serde_json::Value, parse_text: bool) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) if parse_text => s.trim().parse().ok(),
        _ => None,
    }
}

/// Partial body measurements as supplied by the caller, in `unit`.
/// Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BodyMeasurementSet {
    unit: Unit,
    values: BTreeMap<Metric, f64>,
    height: Option<f64>,
}

impl BodyMeasurementSet {
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            values: BTreeMap::new(),
            height: None,
        }
    }

    /// Builder-style insert of a canonical metric.
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.values.insert(metric, value);
        self
    }

    /// Build from raw `(key, value)` pairs. Keys are canonicalized; a
    /// `height` key is kept aside as the body height; unknown keys are
    /// ignored whatever their value. `None` values are treated as absent.
    pub fn from_pairs<'a, I>(unit: Unit, pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, Option<f64>)>,
    {
        let mut set = Self::new(unit);
        for (key, value) in pairs {
            let is_height = key.trim().eq_ignore_ascii_case("height");
            let metric = Metric::from_key(key);
            if !is_height && metric.is_none() {
                debug!(key, "ignoring unknown body measurement");
                continue;
            }
            let Some(value) = value else { continue };
            let value = check_value(key, value)?;
            match metric {
                Some(m) => {
                    set.values.insert(m, value);
                }
                None => set.height = Some(value),
            }
        }
        Ok(set)
    }

    /// Parse a JSON object of measurement name to number. Numeric strings
    /// are accepted; nulls and other non-numeric values read as absent.
    pub fn from_json_str(unit: Unit, json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let pairs = raw.iter().map(|(k, v)| {
            let value = json_number(v, true);
            if value.is_none() && !v.is_null() {
                debug!(key = k.as_str(), "ignoring non-numeric body measurement");
            }
            (k.as_str(), value)
        });
        Ok(Self::from_pairs(unit, pairs)?)
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn get(&self, metric: Metric) -> MetricValue {
        MetricValue::from_option(self.values.get(&metric).copied())
    }

    /// Height in the set's own unit, if a `height` key was supplied.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn metrics(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.values.iter().map(|(m, v)| (*m, *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = Metric> + '_ {
        self.values.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
#[path = "metric_test.rs"]
mod tests;
