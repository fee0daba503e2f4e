//! Browser (`wasm32`) adapters for the [`zoom_slider`] widget.
//!
//! - `dom`: [`WebDocument`], the `web-sys` implementation of [`zoom_slider::WidgetDocument`]
//! - `google_maps`: `GoogleMap`, a [`zoom_slider::ZoomMap`] over a `google.maps.Map` (wasm32)
//! - `entry`: the `zoomSlider` / `zoomSliderWithOptions` JS exports (wasm32)
//! - `component`: the reactive [`ZoomSlider`] leptos component and [`bind_zoom_signal`]

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod component;
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod entry;
#[cfg(target_arch = "wasm32")]
pub mod google_maps;

pub use component::{bind_zoom_signal, ZoomSlider, ZoomSliderBinding, ZoomSliderProps};
pub use dom::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use entry::ZoomSliderHandle;
#[cfg(target_arch = "wasm32")]
pub use google_maps::GoogleMap;
