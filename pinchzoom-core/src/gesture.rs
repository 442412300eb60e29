//! Gesture session state.
//!
//! Each active state carries the reference frame captured when it was
//! entered, so a finger-count change always starts from a fresh frame.

use crate::geometry::{pinch_center, pinch_length, relative_coords};
use crate::points::{Origin, Rect, TouchPoint};
use crate::scale::ScaleLimits;
use crate::transforms::Transform;

/// Reference frame for a one-finger pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanFrame {
    /// Committed transform when the frame was captured
    pub reference: Transform,
    /// Identifier of the tracked finger
    pub id: i32,
    /// Finger position at capture, container-relative
    pub start: Origin,
    /// Latest finger position, container-relative
    pub last: Origin,
    pub start_time: f64,
    /// Entered straight from idle, so it may still turn out to be a tap
    pub from_idle: bool,
}

impl PanFrame {
    pub fn capture(
        reference: Transform,
        touch: &TouchPoint,
        rect: &Rect,
        time: f64,
        from_idle: bool,
    ) -> Self {
        let start = relative_coords(touch.client(), rect);
        Self {
            reference,
            id: touch.id,
            start,
            last: start,
            start_time: time,
            from_idle,
        }
    }

    /// Reference transform shifted by the finger's travel since capture.
    pub fn propose(&self, point: Origin) -> Transform {
        let delta = point.sub(&self.start);
        self.reference.translate(delta.x, delta.y)
    }

    /// Short, nearly stationary single-finger contact.
    pub fn is_tap(&self, end_time: f64, max_travel: f64, max_duration: f64) -> bool {
        self.from_idle
            && self.start.distance_to(&self.last) <= max_travel
            && end_time - self.start_time <= max_duration
    }
}

/// Reference frame for a two-finger pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchFrame {
    pub reference: Transform,
    /// Identifiers of the two tracked fingers, in list order
    pub ids: (i32, i32),
    /// Pinch length at capture
    pub length: f64,
    /// Pinch center at capture, container-relative
    pub center: Origin,
    /// Content point that was under the pinch center at capture
    pub anchor: Origin,
}

impl PinchFrame {
    /// Requires at least two touches.
    pub fn capture(reference: Transform, touches: &[TouchPoint], rect: &Rect) -> Self {
        let center = relative_coords(pinch_center(touches), rect);
        Self {
            reference,
            ids: (touches[0].id, touches[1].id),
            length: pinch_length(touches),
            center,
            anchor: reference.viewport_to_content(center),
        }
    }

    /// Scale by the pinch-length ratio and keep the captured anchor under the
    /// current pinch center. Moving both fingers together pans.
    pub fn propose(&self, touches: &[TouchPoint], rect: &Rect, limits: &ScaleLimits) -> Transform {
        let ratio = if self.length > 0.0 {
            pinch_length(touches) / self.length
        } else {
            1.0
        };
        let scale = limits.clamp(self.reference.scale * ratio);
        let center = relative_coords(pinch_center(touches), rect);
        self.reference.zoom_anchored(scale, self.anchor, center)
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Panning(PanFrame),
    Pinching(PinchFrame),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "idle",
            Gesture::Panning(_) => "panning",
            Gesture::Pinching(_) => "pinching",
        }
    }
}
