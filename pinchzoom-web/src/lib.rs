pub mod binding;
pub mod dom;
pub mod listeners;
pub mod wheel;

use wasm_bindgen::prelude::*;

pub use binding::PinchZoomBinding;
pub use dom::{css_transform, measure_layout, touch_points, DomElement, DomTouch};
pub use listeners::{attach, PinchZoomHandle, PinchZoomUpdate};
pub use wheel::wheel_delta_pixels;

/// Route `log` output to the browser console and install the panic hook.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}
