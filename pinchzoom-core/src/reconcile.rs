//! Reconciliation: turn a proposed transform into a constraint-satisfying one.

use serde::{Deserialize, Serialize};

use crate::bounds::PanBounds;
use crate::numeric::snap_to_target;
use crate::points::Dims;
use crate::scale::ScaleLimits;
use crate::transforms::{is_same_transform, Transform};

/// Everything needed to correct a transform for one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub content: Dims,
    pub container: Dims,
    pub limits: ScaleLimits,
    /// Elastic overhang allowed on each side, in pixels
    pub slack: f64,
    pub center_small: bool,
}

impl Constraints {
    /// Same constraints without elastic overhang.
    pub fn strict(&self) -> Self {
        Self { slack: 0.0, ..*self }
    }

    pub fn bounds(&self, scale: f64) -> PanBounds {
        PanBounds::new(
            &self.content,
            &self.container,
            scale,
            self.slack,
            self.center_small,
        )
    }
}

/// Clamp the scale into its limits, then clamp the offsets into the pan
/// boundaries for that scale.
pub fn correct(proposed: &Transform, constraints: &Constraints) -> Transform {
    let scale = constraints.limits.clamp(proposed.scale);
    let bounds = constraints.bounds(scale);
    Transform {
        top: bounds.top.clamp(proposed.top),
        left: bounds.left.clamp(proposed.left),
        scale,
    }
}

/// How a final correction pass should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Settle {
    /// Apply this transform immediately.
    Settled(Transform),
    /// The jump is visible; an animation layer may interpolate between the two.
    Animate { from: Transform, to: Transform },
}

impl Settle {
    /// Where the content ends up either way.
    pub fn target(&self) -> Transform {
        match self {
            Settle::Settled(t) => *t,
            Settle::Animate { to, .. } => *to,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Settle::Settled(_))
    }
}

/// Decide whether moving from `current` to `target` resolves instantly.
///
/// It does when nothing changes at integer precision, or when every component
/// of `current` snaps onto `target` within `threshold`.
pub fn settle(current: &Transform, target: &Transform, threshold: f64) -> Settle {
    if is_same_transform(Some(current), Some(target)) {
        return Settle::Settled(*target);
    }

    let snapped = Transform {
        top: snap_to_target(current.top, target.top, threshold),
        left: snap_to_target(current.left, target.left, threshold),
        scale: snap_to_target(current.scale, target.scale, threshold),
    };

    if snapped == *target {
        Settle::Settled(*target)
    } else {
        Settle::Animate {
            from: *current,
            to: *target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(slack: f64) -> Constraints {
        Constraints {
            content: Dims::new(200.0, 200.0),
            container: Dims::new(100.0, 100.0),
            limits: ScaleLimits::new(0.5, 3.0),
            slack,
            center_small: true,
        }
    }

    #[test]
    fn correct_leaves_legal_transform_untouched() {
        let t = Transform::new(-50.0, -20.0, 1.0);
        assert_eq!(correct(&t, &constraints(0.0)), t);
    }

    #[test]
    fn correct_clamps_scale_before_bounds() {
        let t = Transform::new(0.0, 0.0, 10.0);
        let corrected = correct(&t, &constraints(0.0));
        assert_eq!(corrected.scale, 3.0);
        assert_eq!(corrected.left, 0.0);
    }

    #[test]
    fn correct_pins_edge_to_container() {
        // Dragged far left: the right edge rests on the container's right edge
        let t = Transform::new(0.0, -500.0, 1.0);
        let corrected = correct(&t, &constraints(0.0));
        assert_eq!(corrected.left, -100.0);
        assert_eq!(corrected.left + 200.0, 100.0);
    }

    #[test]
    fn correct_allows_slack_overhang() {
        let t = Transform::new(15.0, -500.0, 1.0);
        let corrected = correct(&t, &constraints(20.0));
        assert_eq!(corrected.left, -120.0);
        assert_eq!(corrected.top, 15.0);
    }

    #[test]
    fn correct_centers_content_smaller_than_container() {
        let t = Transform::new(3.0, 3.0, 0.25);
        let corrected = correct(&t, &constraints(0.0));
        assert_eq!(corrected.scale, 0.5);
        assert_eq!(corrected.left, 0.0);
        assert_eq!(corrected.top, 0.0);
    }

    #[test]
    fn settle_same_at_integer_precision() {
        let current = Transform::new(0.2, -99.8, 1.0);
        let target = Transform::new(0.0, -100.0, 1.0);
        assert_eq!(settle(&current, &target, 0.0), Settle::Settled(target));
    }

    #[test]
    fn settle_snaps_within_threshold() {
        let current = Transform::new(0.0, -103.0, 1.0);
        let target = Transform::new(0.0, -100.0, 1.0);
        assert!(settle(&current, &target, 5.0).is_settled());
    }

    #[test]
    fn settle_animates_beyond_threshold() {
        let current = Transform::new(0.0, -130.0, 1.0);
        let target = Transform::new(0.0, -100.0, 1.0);
        let result = settle(&current, &target, 5.0);

        assert_eq!(
            result,
            Settle::Animate {
                from: current,
                to: target
            }
        );
        assert_eq!(result.target(), target);
    }
}
