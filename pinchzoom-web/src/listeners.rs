// pinchzoom-web/src/listeners.rs
//! Wires browser touch and wheel events on a container into a [`PinchZoom`] engine.

use std::cell::RefCell;
use std::rc::Rc;

use pinchzoom_core::{Origin, PinchZoom, PinchZoomConfig, Settle, Transform};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent, WheelEvent};

use crate::dom::{measure_layout, DomTouch};
use crate::wheel::wheel_delta_pixels;

/// What the rendering side receives after each reconciled sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PinchZoomUpdate {
    /// Apply immediately (move samples, wheel, programmatic zoom, resize)
    Transform(Transform),
    /// Outcome of a final correction pass or a double tap
    Settle(Settle),
}

type UpdateCallback = Rc<dyn Fn(PinchZoomUpdate)>;

/// Live binding between a container element and an engine.
///
/// Dropping the handle removes every listener it installed.
pub struct PinchZoomHandle {
    engine: Rc<RefCell<PinchZoom>>,
    container: HtmlElement,
    content: HtmlElement,
    on_update: UpdateCallback,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    touch_cancel: Closure<dyn FnMut(TouchEvent)>,
    wheel: Closure<dyn FnMut(WheelEvent)>,
}

impl PinchZoomHandle {
    pub fn transform(&self) -> Transform {
        self.engine.borrow().transform()
    }

    pub fn engine(&self) -> Rc<RefCell<PinchZoom>> {
        Rc::clone(&self.engine)
    }

    pub fn zoom_in(&self) {
        let transform = self.engine.borrow_mut().zoom_in();
        (self.on_update)(PinchZoomUpdate::Transform(transform));
    }

    pub fn zoom_out(&self) {
        let transform = self.engine.borrow_mut().zoom_out();
        (self.on_update)(PinchZoomUpdate::Transform(transform));
    }

    pub fn reset(&self) {
        let transform = self.engine.borrow_mut().reset();
        (self.on_update)(PinchZoomUpdate::Transform(transform));
    }

    /// Re-measure after a resize or orientation change.
    pub fn refresh_layout(&self) {
        let layout = measure_layout(&self.container, &self.content);
        let refreshed = self.engine.borrow_mut().refresh_layout(layout);
        if let Some(transform) = refreshed {
            (self.on_update)(PinchZoomUpdate::Transform(transform));
        }
    }
}

impl Drop for PinchZoomHandle {
    fn drop(&mut self) {
        let listeners: [(&str, &JsValue); 5] = [
            ("touchstart", self.touch_start.as_ref()),
            ("touchmove", self.touch_move.as_ref()),
            ("touchend", self.touch_end.as_ref()),
            ("touchcancel", self.touch_cancel.as_ref()),
            ("wheel", self.wheel.as_ref()),
        ];
        for (name, callback) in listeners {
            if let Err(e) = self
                .container
                .remove_event_listener_with_callback(name, callback.unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", name, e);
            }
        }
    }
}

/// Attach pinch/pan/wheel handling to `container`, transforming `content`.
///
/// `on_update` receives the initial transform right away, then every
/// reconciled transform. Listeners are registered non-passive so the engine
/// can suppress native page zoom and scrolling.
pub fn attach<F>(
    container: HtmlElement,
    content: HtmlElement,
    config: PinchZoomConfig,
    on_update: F,
) -> Result<PinchZoomHandle, JsValue>
where
    F: Fn(PinchZoomUpdate) + 'static,
{
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let engine = Rc::new(RefCell::new(PinchZoom::new(
        config,
        measure_layout(&container, &content),
    )));
    let on_update: UpdateCallback = Rc::new(on_update);

    let touch_start = {
        let engine = Rc::clone(&engine);
        let on_update = Rc::clone(&on_update);
        let container = container.clone();
        let content = content.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let layout = measure_layout(&container, &content);
            let refreshed = engine.borrow_mut().touch_start(&DomTouch(&event), layout);
            if let Some(transform) = refreshed {
                on_update(PinchZoomUpdate::Transform(transform));
            }
        })
    };

    let touch_move = {
        let engine = Rc::clone(&engine);
        let on_update = Rc::clone(&on_update);
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let moved = engine.borrow_mut().touch_move(&DomTouch(&event));
            if let Some(transform) = moved {
                on_update(PinchZoomUpdate::Transform(transform));
            }
        })
    };

    let touch_end = {
        let engine = Rc::clone(&engine);
        let on_update = Rc::clone(&on_update);
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let ended = engine.borrow_mut().touch_end(&DomTouch(&event));
            if let Some(settle) = ended {
                on_update(PinchZoomUpdate::Settle(settle));
            }
        })
    };

    let touch_cancel = {
        let engine = Rc::clone(&engine);
        let on_update = Rc::clone(&on_update);
        Closure::<dyn FnMut(TouchEvent)>::new(move |_event: TouchEvent| {
            let cancelled = engine.borrow_mut().touch_cancel();
            if let Some(settle) = cancelled {
                on_update(PinchZoomUpdate::Settle(settle));
            }
        })
    };

    let wheel = {
        let engine = Rc::clone(&engine);
        let on_update = Rc::clone(&on_update);
        let container = container.clone();
        let content = content.clone();
        Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
            event.prevent_default();
            let layout = measure_layout(&container, &content);
            let delta = wheel_delta_pixels(
                event.delta_y(),
                event.delta_mode(),
                layout.container.height,
            );
            let client = Origin::new(event.client_x() as f64, event.client_y() as f64);
            let transform = {
                let mut engine = engine.borrow_mut();
                engine.refresh_layout(layout);
                engine.wheel(delta, client)
            };
            on_update(PinchZoomUpdate::Transform(transform));
        })
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    let listeners: [(&str, &JsValue); 5] = [
        ("touchstart", touch_start.as_ref()),
        ("touchmove", touch_move.as_ref()),
        ("touchend", touch_end.as_ref()),
        ("touchcancel", touch_cancel.as_ref()),
        ("wheel", wheel.as_ref()),
    ];
    for (name, callback) in listeners {
        container.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            callback.unchecked_ref(),
            &options,
        )?;
    }

    log::debug!("Pinch zoom attached, initial {:?}", engine.borrow().transform());
    let initial = engine.borrow().transform();
    on_update(PinchZoomUpdate::Transform(initial));

    Ok(PinchZoomHandle {
        engine,
        container,
        content,
        on_update,
        touch_start,
        touch_move,
        touch_end,
        touch_cancel,
        wheel,
    })
}
