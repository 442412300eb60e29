// pinchzoom-web/src/dom.rs
//! Newtype adapters from web-sys types to the core's host traits.

use pinchzoom_core::{Dims, Element, Layout, Rect, TouchInput, TouchPoint, Transform};
use web_sys::{HtmlElement, TouchEvent, TouchList};

/// Measures an element via `offsetWidth`/`offsetHeight` and `getBoundingClientRect`.
pub struct DomElement<'a>(pub &'a HtmlElement);

impl Element for DomElement<'_> {
    fn dimensions(&self) -> Dims {
        Dims::new(self.0.offset_width() as f64, self.0.offset_height() as f64)
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// A browser touch event as a core touch sample.
pub struct DomTouch<'a>(pub &'a TouchEvent);

impl TouchInput for DomTouch<'_> {
    fn touches(&self) -> Vec<TouchPoint> {
        touch_points(&self.0.touches())
    }

    fn cancelable(&self) -> bool {
        self.0.cancelable()
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn time_stamp(&self) -> f64 {
        self.0.time_stamp()
    }
}

/// Collect a `TouchList` in list order.
pub fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| {
            TouchPoint::new(
                touch.identifier(),
                touch.client_x() as f64,
                touch.client_y() as f64,
            )
        })
        .collect()
}

/// Fresh layout snapshot of a container and its content.
pub fn measure_layout(container: &HtmlElement, content: &HtmlElement) -> Layout {
    Layout::measure(&DomElement(container), &DomElement(content))
}

/// CSS `matrix()` value for a transform applied with `transform-origin: 0 0`.
pub fn css_transform(transform: &Transform) -> String {
    let m = transform.matrix();
    format!(
        "matrix({}, {}, {}, {}, {}, {})",
        m[0][0], m[1][0], m[0][1], m[1][1], m[0][2], m[1][2]
    )
}
