//! Garment size recommendation.
//!
//! Given a partial set of body measurements, a garment size chart and a
//! category, [`Engine::recommend`] picks one size from XS..XXL, explains the
//! pick with machine-readable reason codes and attaches a confidence value.

pub mod category;
pub mod chart;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod guardrail;
pub mod metric;
pub mod normalize;
pub mod reason;
pub mod score;
pub mod size;
pub mod trace;

pub use category::CategoryId;
pub use chart::{ChartEntry, GarmentSizeChart};
pub use config::EngineConfig;
pub use engine::{Engine, RecommendRequest, RecommendationResult};
pub use error::{ConfigError, ValidationError};
pub use guardrail::FitPreference;
pub use metric::{BodyMeasurementSet, Metric, Unit};
pub use reason::{ReasonCode, ReasonCodes};
pub use size::SizeLabel;
