//! Engine configuration.
//!
//! Options are read whenever bounds are resolved (construction, layout refresh,
//! gesture start) and are not re-validated mid-gesture.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scale::MinScale;

/// Where content sits when the engine starts or resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialPosition {
    #[default]
    Center,
    TopLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinchZoomConfig {
    /// Number, or any string for fit-to-container
    pub min_scale: MinScale,
    pub max_scale: f64,
    /// Distance (pixels or scale units) under which a correction applies instantly
    pub snap_threshold: f64,
    /// Overhang allowed past the pan boundaries while fingers are down
    pub elastic_slack: f64,
    /// Center content that is smaller than the container on an axis
    pub center_small_content: bool,
    pub initial_position: InitialPosition,
    /// Scale a double tap zooms to from the base scale
    pub double_tap_scale: f64,
    pub double_tap_interval_ms: f64,
    /// Max finger travel for a tap, and max distance between the two taps
    pub double_tap_distance: f64,
    /// Exponential wheel zoom factor per pixel of delta
    pub wheel_sensitivity: f64,
    /// Multiplier used by zoom_in / zoom_out
    pub zoom_step: f64,
}

impl Default for PinchZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: MinScale::default(),
            max_scale: 4.0,
            snap_threshold: 0.5,
            elastic_slack: 0.0,
            center_small_content: true,
            initial_position: InitialPosition::Center,
            double_tap_scale: 2.0,
            double_tap_interval_ms: 300.0,
            double_tap_distance: 30.0,
            wheel_sensitivity: 0.0015,
            zoom_step: 1.25,
        }
    }
}

impl PinchZoomConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_scale.is_finite() || self.max_scale <= 0.0 {
            return Err(ConfigError::InvalidMaxScale(self.max_scale));
        }

        if let MinScale::Value(min) = self.min_scale {
            // NaN and 0 fall back to scale 1 when resolved
            if min < 0.0 || min.is_infinite() {
                return Err(ConfigError::InvalidMinScale(min));
            }
            if min > self.max_scale {
                return Err(ConfigError::MinAboveMax {
                    min,
                    max: self.max_scale,
                });
            }
        }

        let non_negative = [
            ("snap_threshold", self.snap_threshold),
            ("elastic_slack", self.elastic_slack),
            ("double_tap_scale", self.double_tap_scale),
            ("double_tap_interval_ms", self.double_tap_interval_ms),
            ("double_tap_distance", self.double_tap_distance),
            ("wheel_sensitivity", self.wheel_sensitivity),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidNonNegative { name, value });
            }
        }

        if !(self.zoom_step > 1.0 && self.zoom_step.is_finite()) {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }

        Ok(())
    }
}
