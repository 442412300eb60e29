//! Configuration errors. The gesture path itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_scale must be a positive finite number, got {0}")]
    InvalidMaxScale(f64),

    #[error("min_scale must be a non-negative finite number or \"fit\", got {0}")]
    InvalidMinScale(f64),

    #[error("min_scale {min} exceeds max_scale {max}")]
    MinAboveMax { min: f64, max: f64 },

    #[error("{name} must be a non-negative finite number, got {value}")]
    InvalidNonNegative { name: &'static str, value: f64 },

    #[error("zoom_step must be greater than 1, got {0}")]
    InvalidZoomStep(f64),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
