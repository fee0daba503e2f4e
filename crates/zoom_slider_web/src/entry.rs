//! JS-facing constructors and the handle they return.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use zoom_slider::{SliderError, ZoomSliderOptions, ZoomSliderWidget};

use crate::{dom::WebDocument, google_maps::GoogleMap};

fn to_js_error(err: SliderError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn build(map: JsValue, options: ZoomSliderOptions) -> Result<ZoomSliderHandle, JsValue> {
    console_error_panic_hook::set_once();
    let map = GoogleMap::from_js(map).map_err(to_js_error)?;
    let document = WebDocument::from_window().map_err(to_js_error)?;
    let widget = ZoomSliderWidget::create(Rc::new(map), Rc::new(document), options.resolve())
        .map_err(to_js_error)?;
    Ok(ZoomSliderHandle { widget })
}

/// Creates a zoom slider for a `google.maps.Map`.
///
/// `minZoom`, `maxZoom`, and `containerId` fall back to `0`, `21`, and `"zoomSlider"` when
/// omitted or falsy.
///
/// # Errors
///
/// Throws when the map lacks the zoom methods, the bounds are inverted, or the container is
/// missing.
#[wasm_bindgen(js_name = zoomSlider)]
pub fn zoom_slider(
    map: JsValue,
    min_zoom: Option<i32>,
    max_zoom: Option<i32>,
    container_id: Option<String>,
) -> Result<ZoomSliderHandle, JsValue> {
    build(
        map,
        ZoomSliderOptions {
            min_zoom,
            max_zoom,
            container_id,
        },
    )
}

/// Creates a zoom slider from an options object `{ minZoom?, maxZoom?, containerId? }`.
///
/// # Errors
///
/// Throws on malformed options and on the same conditions as [`zoom_slider`].
#[wasm_bindgen(js_name = zoomSliderWithOptions)]
pub fn zoom_slider_with_options(
    map: JsValue,
    options: JsValue,
) -> Result<ZoomSliderHandle, JsValue> {
    let options = if options.is_null() || options.is_undefined() {
        ZoomSliderOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|err| to_js_error(SliderError::InvalidOptions(err.to_string())))?
    };
    build(map, options)
}

/// Live zoom slider owned by JS.
#[wasm_bindgen(js_name = ZoomSlider)]
pub struct ZoomSliderHandle {
    widget: ZoomSliderWidget<GoogleMap, WebDocument>,
}

#[wasm_bindgen(js_class = ZoomSlider)]
impl ZoomSliderHandle {
    /// Zooms in by one level.
    #[wasm_bindgen(js_name = increaseZoom)]
    pub fn increase_zoom(&self) {
        self.widget.increase_zoom();
    }

    /// Zooms out by one level.
    #[wasm_bindgen(js_name = decreaseZoom)]
    pub fn decrease_zoom(&self) {
        self.widget.decrease_zoom();
    }

    /// Sets the zoom from slider text; non-numeric text is ignored.
    #[wasm_bindgen(js_name = updateSlider)]
    pub fn update_slider(&self, value: &str) {
        self.widget.update_slider(value);
    }

    /// Re-reads the map zoom into the range input. Returns whether it changed.
    #[wasm_bindgen(js_name = syncSlider)]
    pub fn sync_slider(&self) -> bool {
        self.widget.sync_slider()
    }

    /// Resolved lower bound.
    #[wasm_bindgen(getter, js_name = minZoom)]
    pub fn min_zoom(&self) -> i32 {
        self.widget.config().min_zoom
    }

    /// Resolved upper bound.
    #[wasm_bindgen(getter, js_name = maxZoom)]
    pub fn max_zoom(&self) -> i32 {
        self.widget.config().max_zoom
    }

    /// Resolved container id.
    #[wasm_bindgen(getter, js_name = containerId)]
    pub fn container_id(&self) -> String {
        self.widget.config().container_id.clone()
    }
}
