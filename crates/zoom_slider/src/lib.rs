//! Zoom slider widget bound to a map view.
//!
//! The widget renders an increase button, a range input, and a decrease button into a host
//! container and keeps the range input in step with the map's zoom in both directions. Host
//! collaborators are reached through two contracts:
//! - [`ZoomMap`] for zoom get/set and the zoom-changed notification
//! - [`WidgetDocument`] for element lookup, creation, attributes, and event registration
//!
//! Browser adapters live in `zoom_slider_web`; [`MemoryZoomMap`] and [`MemoryDocument`] serve
//! tests and headless hosts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod control;
pub mod document;
pub mod error;
pub mod map;
pub mod widget;

pub use config::{
    parse_zoom_value, ZoomSliderConfig, ZoomSliderOptions, DECREASE_CONTROL_ID,
    DEFAULT_CONTAINER_ID, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, INCREASE_CONTROL_ID,
    RANGE_CONTROL_ID, ZOOM_BUTTON_CLASS,
};
pub use control::ZoomControl;
pub use document::{
    ClickHandler, CommitHandler, ElementKind, MemoryDocument, MemoryElement, WidgetDocument,
};
pub use error::SliderError;
pub use map::{MemoryZoomMap, ZoomChangedListener, ZoomMap};
pub use widget::{ZoomSliderControls, ZoomSliderWidget};
