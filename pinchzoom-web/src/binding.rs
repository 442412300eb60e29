//! JavaScript-facing wrapper around [`attach`].

use pinchzoom_core::{ConfigError, PinchZoomConfig};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::listeners::{attach, PinchZoomHandle, PinchZoomUpdate};

/// `new PinchZoom(container, content, configJson, onUpdate)` from JS.
///
/// `onUpdate` is called with `{ kind, value }` objects mirroring
/// [`PinchZoomUpdate`].
#[wasm_bindgen(js_name = PinchZoom)]
pub struct PinchZoomBinding {
    handle: PinchZoomHandle,
}

#[wasm_bindgen(js_class = PinchZoom)]
impl PinchZoomBinding {
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: HtmlElement,
        content: HtmlElement,
        config_json: &str,
        on_update: js_sys::Function,
    ) -> Result<PinchZoomBinding, JsValue> {
        let config = parse_config(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let handle = attach(container, content, config, move |update| {
            match update_to_js(&update) {
                Ok(value) => {
                    if let Err(e) = on_update.call1(&JsValue::NULL, &value) {
                        log::warn!("onUpdate callback threw: {:?}", e);
                    }
                }
                Err(e) => log::warn!("Failed to convert update for JS: {:?}", e),
            }
        })?;

        Ok(Self { handle })
    }

    /// Current transform as `{ top, left, scale }`.
    pub fn transform(&self) -> Result<JsValue, JsValue> {
        let json = serde_json::to_string(&self.handle.transform())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&json)
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self) {
        self.handle.zoom_in();
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) {
        self.handle.zoom_out();
    }

    pub fn reset(&self) {
        self.handle.reset();
    }

    #[wasm_bindgen(js_name = refreshLayout)]
    pub fn refresh_layout(&self) {
        self.handle.refresh_layout();
    }
}

/// Empty input means defaults.
fn parse_config(config_json: &str) -> Result<PinchZoomConfig, ConfigError> {
    if config_json.trim().is_empty() {
        return Ok(PinchZoomConfig::default());
    }
    PinchZoomConfig::from_json(config_json)
}

fn update_to_js(update: &PinchZoomUpdate) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(update).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}
