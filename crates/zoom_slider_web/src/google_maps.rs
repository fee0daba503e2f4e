//! [`ZoomMap`] binding for a `google.maps.Map` instance handed over from JS.

use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use zoom_slider::{SliderError, ZoomChangedListener, ZoomMap};

const ZOOM_CHANGED_EVENT: &str = "zoom_changed";

#[derive(Debug, Clone)]
/// Google Maps map object with its zoom methods resolved up front.
pub struct GoogleMap {
    inner: JsValue,
    get_zoom: Function,
    set_zoom: Function,
    add_listener: Function,
}

impl GoogleMap {
    /// Validates that `map` exposes `getZoom`, `setZoom`, and `addListener`.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidMap`] when `map` is null or a method is missing.
    pub fn from_js(map: JsValue) -> Result<Self, SliderError> {
        if map.is_null() || map.is_undefined() {
            return Err(SliderError::InvalidMap(
                "map is null or undefined".to_string(),
            ));
        }
        let get_zoom = method(&map, "getZoom")?;
        let set_zoom = method(&map, "setZoom")?;
        let add_listener = method(&map, "addListener")?;
        Ok(Self {
            inner: map,
            get_zoom,
            set_zoom,
            add_listener,
        })
    }
}

fn method(map: &JsValue, name: &str) -> Result<Function, SliderError> {
    Reflect::get(map, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| SliderError::InvalidMap(format!("missing `{name}` function")))
}

/// Text of a thrown JS value: an `Error`'s message, a thrown string, or its debug form.
fn thrown_message(thrown: JsValue) -> String {
    match thrown.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => thrown.as_string().unwrap_or_else(|| format!("{thrown:?}")),
    }
}

impl ZoomMap for GoogleMap {
    /// Reads `getZoom()`. A map without a zoom yet (before its first render) reads as `0`.
    fn zoom(&self) -> i32 {
        match self.get_zoom.call0(&self.inner) {
            Ok(value) => match value.as_f64() {
                Some(zoom) => zoom.round() as i32,
                None => {
                    tracing::warn!("map returned a non-numeric zoom");
                    0
                }
            },
            Err(err) => {
                tracing::warn!(error = %thrown_message(err), "map getZoom failed");
                0
            }
        }
    }

    fn set_zoom(&self, zoom: i32) {
        if let Err(err) = self.set_zoom.call1(&self.inner, &JsValue::from(zoom)) {
            tracing::warn!(zoom, error = %thrown_message(err), "map setZoom failed");
        }
    }

    fn subscribe_zoom_changed(&self, mut listener: ZoomChangedListener) -> Result<(), String> {
        let closure = Closure::<dyn FnMut()>::wrap(Box::new(move || listener()));
        self.add_listener
            .call2(
                &self.inner,
                &JsValue::from_str(ZOOM_CHANGED_EVENT),
                closure.as_ref(),
            )
            .map_err(thrown_message)?;
        closure.forget();
        Ok(())
    }
}
