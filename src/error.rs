use std::path::PathBuf;

use thiserror::Error;

use crate::size::SizeLabel;

/// Request-level failure. Raised before any scoring happens; a request that
/// produces one of these never yields a partial recommendation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error(
        "invalid chart_type '{value}' for size {size}: expected one of 'garment', 'body'"
    )]
    InvalidChartType { size: SizeLabel, value: String },

    #[error("unknown category '{0}': expected upper_body, lower_body, dress or an id in 1..=13")]
    UnknownCategory(String),

    #[error("unknown size label '{0}': expected one of XS, S, M, L, XL, XXL")]
    UnknownSize(String),

    #[error("unknown unit '{0}': expected 'cm' or 'inch'")]
    UnknownUnit(String),

    #[error("chart sizes out of order: {next} listed after {prev}")]
    ChartOrder { prev: SizeLabel, next: SizeLabel },

    #[error("size {0} appears more than once in the chart")]
    DuplicateSize(SizeLabel),

    #[error("size chart has no entries")]
    EmptyChart,

    #[error("invalid value {value} for measurement '{metric}'")]
    InvalidMeasurement { metric: String, value: f64 },
}

/// Failure loading or validating an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
