use serde::{Deserialize, Serialize};

use crate::points::Origin;

/// Placement and zoom of the content relative to the container's top-left.
///
/// A content point `p` (unscaled pixels) appears in the container at
/// `(left + p.x * scale, top + p.y * scale)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub top: f64,
    pub left: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn new(top: f64, left: f64, scale: f64) -> Self {
        Self { top, left, scale }
    }

    /// No offset, scale 1.
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Top-left corner of the scaled content in container space.
    pub fn offset(&self) -> Origin {
        Origin::new(self.left, self.top)
    }

    /// Shift by `(dx, dy)` container pixels. Positive dx moves right, positive dy moves down.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            scale: self.scale,
        }
    }

    /// Map a content point to container space.
    pub fn content_to_viewport(&self, point: Origin) -> Origin {
        point.mul_scalar(self.scale).add(&self.offset())
    }

    /// Map a container point back to unscaled content space.
    pub fn viewport_to_content(&self, point: Origin) -> Origin {
        point.sub(&self.offset()).div_scalar(self.scale)
    }

    /// Change the scale while keeping the content point under `anchor` fixed.
    pub fn zoom_around(&self, scale: f64, anchor: Origin) -> Self {
        let content_point = self.viewport_to_content(anchor);
        self.zoom_anchored(scale, content_point, anchor)
    }

    /// Place `content_point` under `anchor` at the given scale.
    ///
    /// This is what a pinch does: the content under the reference pinch center
    /// follows the current pinch center.
    pub fn zoom_anchored(&self, scale: f64, content_point: Origin, anchor: Origin) -> Self {
        let offset = anchor.sub(&content_point.mul_scalar(scale));
        Self {
            top: offset.y,
            left: offset.x,
            scale,
        }
    }

    /// 3x3 homogeneous matrix, row-major: `[[s, 0, left], [0, s, top], [0, 0, 1]]`.
    ///
    /// Matches the argument order renderers expect for `setTransform` style APIs
    /// as `(m[0][0], m[1][0], m[0][1], m[1][1], m[0][2], m[1][2])`.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.scale, 0.0, self.left],
            [0.0, self.scale, self.top],
            [0.0, 0.0, 1.0],
        ]
    }
}

/// Nearest integer with halves rounded up, so `-2.5` becomes `-2`.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Equality at integer precision. Two absent transforms are equal, one absent is not.
///
/// Used to decide whether a correction changed anything worth re-emitting,
/// so sub-pixel float noise does not cause churn.
pub fn is_same_transform(a: Option<&Transform>, b: Option<&Transform>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            round_half_up(a.top) == round_half_up(b.top)
                && round_half_up(a.left) == round_half_up(b.left)
                && round_half_up(a.scale) == round_half_up(b.scale)
        }
        _ => false,
    }
}
