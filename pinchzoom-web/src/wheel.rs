use web_sys::WheelEvent;

/// Pixels per line for `DOM_DELTA_LINE` wheel events.
pub const LINE_HEIGHT_PX: f64 = 16.0;

/// Normalize a wheel delta to pixels.
///
/// Line-mode deltas use a fixed line height, page-mode deltas use the
/// container height.
pub fn wheel_delta_pixels(delta: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        WheelEvent::DOM_DELTA_LINE => delta * LINE_HEIGHT_PX,
        WheelEvent::DOM_DELTA_PAGE => delta * page_height,
        _ => delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn pixel_mode_passes_through() {
        assert_eq!(wheel_delta_pixels(-53.0, WheelEvent::DOM_DELTA_PIXEL, 400.0), -53.0);
    }

    #[wasm_bindgen_test]
    fn line_mode_uses_line_height() {
        assert_eq!(wheel_delta_pixels(3.0, WheelEvent::DOM_DELTA_LINE, 400.0), 48.0);
    }

    #[wasm_bindgen_test]
    fn page_mode_uses_page_height() {
        assert_eq!(wheel_delta_pixels(-1.0, WheelEvent::DOM_DELTA_PAGE, 400.0), -400.0);
    }
}
