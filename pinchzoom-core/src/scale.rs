//! Scale-bound resolution.
//!
//! The minimum scale is either a fixed number or the "fit" sentinel. Fit mode
//! is resolved against live dimensions every time, so it follows container
//! resizes instead of freezing at construction.

use serde::{Deserialize, Serialize};

use crate::numeric::clamp;
use crate::points::Dims;

/// Configured minimum scale.
///
/// Deserializes from a JSON number or from any string (the fit sentinel,
/// conventionally `"fit"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "MinScaleRepr", into = "MinScaleRepr")]
pub enum MinScale {
    /// Shrink until the content fits the container, never above 1
    Fit,
    /// Fixed floor. Zero or NaN resolves to 1.
    Value(f64),
}

impl Default for MinScale {
    fn default() -> Self {
        MinScale::Value(1.0)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MinScaleRepr {
    Number(f64),
    Sentinel(String),
}

impl From<MinScaleRepr> for MinScale {
    fn from(repr: MinScaleRepr) -> Self {
        match repr {
            MinScaleRepr::Number(value) => MinScale::Value(value),
            MinScaleRepr::Sentinel(_) => MinScale::Fit,
        }
    }
}

impl From<MinScale> for MinScaleRepr {
    fn from(min_scale: MinScale) -> Self {
        match min_scale {
            MinScale::Fit => MinScaleRepr::Sentinel("fit".to_string()),
            MinScale::Value(value) => MinScaleRepr::Number(value),
        }
    }
}

/// Largest scale <= 1 at which the content fits the container on both axes.
///
/// Falls back to 1 when either content dimension is not positive.
pub fn fit_scale(content: &Dims, container: &Dims) -> f64 {
    if content.width > 0.0 && content.height > 0.0 {
        (container.width / content.width)
            .min(container.height / content.height)
            .min(1.0)
    } else {
        1.0
    }
}

/// Resolve the effective minimum scale.
pub fn base_scale(content: &Dims, container: &Dims, min_scale: MinScale) -> f64 {
    match min_scale {
        MinScale::Fit => fit_scale(content, container),
        MinScale::Value(value) if value == 0.0 || value.is_nan() => 1.0,
        MinScale::Value(value) => value,
    }
}

/// Resolved `[min, max]` scale range for the current layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLimits {
    pub min: f64,
    pub max: f64,
}

impl ScaleLimits {
    /// A base scale above `max` collapses the range onto `max`.
    pub fn new(base: f64, max: f64) -> Self {
        Self {
            min: base.min(max),
            max,
        }
    }

    pub fn resolve(content: &Dims, container: &Dims, min_scale: MinScale, max: f64) -> Self {
        Self::new(base_scale(content, container, min_scale), max)
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        clamp(self.min, self.max, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: f64, height: f64) -> Dims {
        Dims::new(width, height)
    }

    #[test]
    fn fit_scale_shrinks_wide_content() {
        assert_eq!(fit_scale(&dims(200.0, 100.0), &dims(100.0, 100.0)), 0.5);
    }

    #[test]
    fn fit_scale_never_upscales() {
        assert_eq!(fit_scale(&dims(50.0, 50.0), &dims(100.0, 100.0)), 1.0);
    }

    #[test]
    fn fit_scale_uses_tighter_axis() {
        assert_eq!(fit_scale(&dims(400.0, 1000.0), &dims(200.0, 250.0)), 0.25);
    }

    #[test]
    fn fit_scale_degenerate_content_falls_back_to_one() {
        assert_eq!(fit_scale(&dims(0.0, 100.0), &dims(100.0, 100.0)), 1.0);
        assert_eq!(fit_scale(&dims(100.0, 0.0), &dims(100.0, 100.0)), 1.0);
        assert_eq!(fit_scale(&dims(-5.0, 100.0), &dims(100.0, 100.0)), 1.0);
    }

    #[test]
    fn base_scale_fit_matches_fit_scale() {
        let content = dims(200.0, 100.0);
        let container = dims(100.0, 100.0);
        assert_eq!(
            base_scale(&content, &container, MinScale::Fit),
            fit_scale(&content, &container)
        );
    }

    #[test]
    fn base_scale_numeric_is_used_directly() {
        let d = dims(10.0, 10.0);
        assert_eq!(base_scale(&d, &d, MinScale::Value(2.0)), 2.0);
        assert_eq!(base_scale(&d, &d, MinScale::Value(0.25)), 0.25);
    }

    #[test]
    fn base_scale_falsy_defaults_to_one() {
        let d = dims(10.0, 10.0);
        assert_eq!(base_scale(&d, &d, MinScale::Value(0.0)), 1.0);
        assert_eq!(base_scale(&d, &d, MinScale::Value(f64::NAN)), 1.0);
    }

    #[test]
    fn min_scale_deserializes_from_number_or_string() {
        let fit: MinScale = serde_json::from_str("\"fit\"").unwrap();
        let any_string: MinScale = serde_json::from_str("\"contain\"").unwrap();
        let numeric: MinScale = serde_json::from_str("0.5").unwrap();

        assert_eq!(fit, MinScale::Fit);
        assert_eq!(any_string, MinScale::Fit);
        assert_eq!(numeric, MinScale::Value(0.5));
    }

    #[test]
    fn min_scale_serializes_fit_as_sentinel() {
        assert_eq!(serde_json::to_string(&MinScale::Fit).unwrap(), "\"fit\"");
        assert_eq!(serde_json::to_string(&MinScale::Value(2.0)).unwrap(), "2.0");
    }

    #[test]
    fn scale_limits_collapse_when_base_exceeds_max() {
        let limits = ScaleLimits::new(3.0, 2.0);
        assert_eq!(limits.min, 2.0);
        assert_eq!(limits.clamp(10.0), 2.0);
        assert_eq!(limits.clamp(0.1), 2.0);
    }
}
