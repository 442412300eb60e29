//! The pinch-zoom engine: owns the committed transform and the gesture session,
//! and reconciles every touch sample into a constraint-satisfying transform.

use log::{debug, info, trace, warn};

use crate::config::{InitialPosition, PinchZoomConfig};
use crate::gesture::{Gesture, PanFrame, PinchFrame};
use crate::geometry::relative_coords;
use crate::host::{prevent_default_if_cancelable, Layout, TouchInput};
use crate::numeric::snap_to_target;
use crate::points::{dims_equal, Origin, TouchPoint};
use crate::reconcile::{correct, settle, Constraints, Settle};
use crate::scale::ScaleLimits;
use crate::transforms::{is_same_transform, Transform};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tap {
    at: Origin,
    time: f64,
}

/// Touch-driven zoom/pan state for one content element in one container.
///
/// Samples must be fed in delivery order; each call reconciles and returns
/// before the next sample is processed.
#[derive(Debug, Clone)]
pub struct PinchZoom {
    config: PinchZoomConfig,
    layout: Layout,
    limits: ScaleLimits,
    transform: Transform,
    gesture: Gesture,
    last_tap: Option<Tap>,
}

impl PinchZoom {
    /// Create an engine with content at the base scale, placed per
    /// `config.initial_position`.
    pub fn new(config: PinchZoomConfig, layout: Layout) -> Self {
        let limits = ScaleLimits::resolve(
            &layout.content,
            &layout.container,
            config.min_scale,
            config.max_scale,
        );
        let mut engine = Self {
            config,
            layout,
            limits,
            transform: Transform::identity(),
            gesture: Gesture::Idle,
            last_tap: None,
        };
        engine.transform = engine.initial_transform();

        debug!(
            "PinchZoom created: scale range [{}, {}], initial {:?}",
            limits.min, limits.max, engine.transform
        );

        engine
    }

    pub fn config(&self) -> &PinchZoomConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The committed transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Resolved minimum scale for the current layout.
    pub fn base_scale(&self) -> f64 {
        self.limits.min
    }

    pub fn is_interacting(&self) -> bool {
        !self.gesture.is_idle()
    }

    fn constraints(&self, elastic: bool) -> Constraints {
        Constraints {
            content: self.layout.content,
            container: self.layout.container,
            limits: self.limits,
            slack: if elastic { self.config.elastic_slack } else { 0.0 },
            center_small: self.config.center_small_content,
        }
    }

    fn initial_transform(&self) -> Transform {
        let scale = self.limits.min;
        let proposed = match self.config.initial_position {
            InitialPosition::Center => {
                let scaled = self.layout.content.scaled(scale);
                Transform::new(
                    (self.layout.container.height - scaled.height) / 2.0,
                    (self.layout.container.width - scaled.width) / 2.0,
                    scale,
                )
            }
            InitialPosition::TopLeft => Transform::new(0.0, 0.0, scale),
        };
        correct(&proposed, &self.constraints(false))
    }

    /// Take a fresh layout snapshot.
    ///
    /// When the container or content size changed, the scale range is
    /// re-resolved (fit mode follows the new size) and the committed transform
    /// is corrected. Content resting at the old base scale is re-placed at the
    /// new one. Returns the new transform if it moved at integer precision.
    pub fn refresh_layout(&mut self, layout: Layout) -> Option<Transform> {
        let unchanged = dims_equal(Some(&self.layout.container), Some(&layout.container))
            && dims_equal(Some(&self.layout.content), Some(&layout.content));
        self.layout = layout;
        if unchanged {
            return None;
        }

        info!(
            "Layout changed: container {}x{}, content {}x{}",
            layout.container.width,
            layout.container.height,
            layout.content.width,
            layout.content.height
        );

        let previous = self.transform;
        let was_at_base = previous.scale == self.limits.min;
        self.limits = ScaleLimits::resolve(
            &layout.content,
            &layout.container,
            self.config.min_scale,
            self.config.max_scale,
        );
        self.transform = if was_at_base {
            self.initial_transform()
        } else {
            correct(&previous, &self.constraints(!self.gesture.is_idle()))
        };

        if is_same_transform(Some(&previous), Some(&self.transform)) {
            None
        } else {
            Some(self.transform)
        }
    }

    /// Handle a touch-start sample. A new gesture re-measures the layout first.
    ///
    /// Returns a transform only if the layout refresh moved the content.
    pub fn touch_start<E: TouchInput + ?Sized>(
        &mut self,
        event: &E,
        layout: Layout,
    ) -> Option<Transform> {
        prevent_default_if_cancelable(event);

        let refreshed = if self.gesture.is_idle() {
            self.refresh_layout(layout)
        } else {
            None
        };

        let touches = event.touches();
        if touches.is_empty() {
            warn!("Touch start without active touches ignored");
            return refreshed;
        }
        self.sync_gesture(&touches, event.time_stamp());

        refreshed
    }

    /// Handle a touch-move sample, returning the corrected transform.
    pub fn touch_move<E: TouchInput + ?Sized>(&mut self, event: &E) -> Option<Transform> {
        if self.gesture.is_idle() {
            return None;
        }

        let touches = event.touches();
        if touches.is_empty() {
            warn!("Touch move without active touches ignored");
            return None;
        }

        prevent_default_if_cancelable(event);
        self.sync_gesture(&touches, event.time_stamp());

        let rect = self.layout.container_rect;
        let limits = self.limits;
        let proposed = match &mut self.gesture {
            Gesture::Idle => return None,
            Gesture::Panning(frame) => {
                let point = relative_coords(touches[0].client(), &rect);
                frame.last = point;
                frame.propose(point)
            }
            Gesture::Pinching(frame) => frame.propose(&touches, &rect, &limits),
        };

        let corrected = correct(&proposed, &self.constraints(true));
        trace!("Reconciled {:?} -> {:?}", proposed, corrected);
        self.transform = corrected;

        Some(corrected)
    }

    /// Handle a touch-end sample carrying the remaining touches.
    ///
    /// While fingers remain, the session switches frames and nothing is
    /// emitted. When the last finger lifts, the final correction pass runs, or
    /// a double tap toggles the zoom.
    pub fn touch_end<E: TouchInput + ?Sized>(&mut self, event: &E) -> Option<Settle> {
        if self.gesture.is_idle() {
            return None;
        }

        let touches = event.touches();
        let time = event.time_stamp();
        if !touches.is_empty() {
            self.sync_gesture(&touches, time);
            return None;
        }

        let ended = std::mem::take(&mut self.gesture);
        debug!("Gesture {} -> idle", ended.name());

        if let Gesture::Panning(frame) = ended {
            let tap = frame.is_tap(
                time,
                self.config.double_tap_distance,
                self.config.double_tap_interval_ms,
            );
            if tap && self.register_tap(frame.start, time) {
                return Some(self.toggle_zoom(frame.start));
            }
            if !tap {
                self.last_tap = None;
            }
        } else {
            self.last_tap = None;
        }

        Some(self.finish())
    }

    /// Abandon the session (touch-cancel, or pointers vanished without an end
    /// event). The final correction pass still runs.
    pub fn touch_cancel(&mut self) -> Option<Settle> {
        if self.gesture.is_idle() {
            return None;
        }

        debug!("Gesture {} cancelled", self.gesture.name());
        self.gesture = Gesture::Idle;
        self.last_tap = None;

        Some(self.finish())
    }

    /// Zoom by a wheel delta around a client-space point.
    pub fn wheel(&mut self, delta_y: f64, client: Origin) -> Transform {
        let anchor = relative_coords(client, &self.layout.container_rect);
        let factor = (-delta_y * self.config.wheel_sensitivity).exp();
        self.zoom_to(self.transform.scale * factor, Some(anchor))
    }

    /// Zoom to `scale` keeping the container-relative `anchor` fixed
    /// (container center when `None`).
    pub fn zoom_to(&mut self, scale: f64, anchor: Option<Origin>) -> Transform {
        let anchor = anchor.unwrap_or_else(|| self.layout.container.center());
        let scale = self.limits.clamp(scale);
        let proposed = self.transform.zoom_around(scale, anchor);
        self.transform = correct(&proposed, &self.constraints(false));
        self.transform
    }

    pub fn zoom_in(&mut self) -> Transform {
        self.zoom_to(self.transform.scale * self.config.zoom_step, None)
    }

    pub fn zoom_out(&mut self) -> Transform {
        self.zoom_to(self.transform.scale / self.config.zoom_step, None)
    }

    /// Back to the base scale and initial placement. Ends any gesture.
    pub fn reset(&mut self) -> Transform {
        self.gesture = Gesture::Idle;
        self.last_tap = None;
        self.transform = self.initial_transform();
        self.transform
    }

    /// Commit an externally proposed transform after correction.
    ///
    /// Returns `None` when the result matches the previous transform at
    /// integer precision.
    pub fn set_transform(&mut self, proposed: Transform) -> Option<Transform> {
        let previous = self.transform;
        self.transform = correct(&proposed, &self.constraints(false));
        if is_same_transform(Some(&previous), Some(&self.transform)) {
            None
        } else {
            Some(self.transform)
        }
    }

    /// Keep the current frame when the tracked fingers are unchanged,
    /// otherwise capture a fresh one from the committed transform.
    fn sync_gesture(&mut self, touches: &[TouchPoint], time: f64) {
        let rect = self.layout.container_rect;
        let next = match (&self.gesture, touches) {
            (_, []) => Gesture::Idle,
            (Gesture::Panning(frame), [only]) if frame.id == only.id => return,
            (Gesture::Pinching(frame), [a, b, ..]) if frame.ids == (a.id, b.id) => return,
            (previous, [only]) => Gesture::Panning(PanFrame::capture(
                self.transform,
                only,
                &rect,
                time,
                previous.is_idle(),
            )),
            (_, many) => Gesture::Pinching(PinchFrame::capture(self.transform, many, &rect)),
        };

        debug!("Gesture {} -> {}", self.gesture.name(), next.name());
        self.gesture = next;
    }

    /// Record a tap; true when it completes a double tap.
    fn register_tap(&mut self, at: Origin, time: f64) -> bool {
        let is_double = matches!(
            self.last_tap,
            Some(previous)
                if time - previous.time <= self.config.double_tap_interval_ms
                    && previous.at.distance_to(&at) <= self.config.double_tap_distance
        );

        self.last_tap = if is_double {
            None
        } else {
            Some(Tap { at, time })
        };
        is_double
    }

    /// Zoom in around `anchor` from the base scale, otherwise back to base.
    fn toggle_zoom(&mut self, anchor: Origin) -> Settle {
        let current = self.transform;
        let base = self.limits.min;

        let target = if snap_to_target(current.scale, base, self.config.snap_threshold) == base {
            let scale = self.limits.clamp(self.config.double_tap_scale);
            correct(&current.zoom_around(scale, anchor), &self.constraints(false))
        } else {
            self.initial_transform()
        };

        debug!("Double tap at {:?}: scale {} -> {}", anchor, current.scale, target.scale);
        self.transform = target;
        settle(&current, &target, self.config.snap_threshold)
    }

    /// Final correction pass: resolve elastic overhang with strict bounds.
    fn finish(&mut self) -> Settle {
        let current = self.transform;
        let target = correct(&current, &self.constraints(false));
        self.transform = target;

        let result = settle(&current, &target, self.config.snap_threshold);
        trace!("Final correction {:?}", result);
        result
    }
}
