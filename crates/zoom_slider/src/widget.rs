//! The zoom slider widget: DOM construction plus the two-way zoom binding.

use std::rc::{Rc, Weak};

use crate::{
    config::{
        parse_zoom_value, ZoomSliderConfig, DECREASE_CONTROL_ID, INCREASE_CONTROL_ID,
        RANGE_CONTROL_ID, ZOOM_BUTTON_CLASS,
    },
    control::ZoomControl,
    document::{ElementKind, WidgetDocument},
    error::SliderError,
    map::ZoomMap,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Elements created and owned by a widget.
pub struct ZoomSliderControls<E> {
    /// Button that zooms in.
    pub increase: E,
    /// Range input mirroring the map zoom.
    pub range: E,
    /// Button that zooms out.
    pub decrease: E,
}

/// Zoom slider bound to a map.
///
/// Construction appends an increase button, a range input, and a decrease button to the
/// configured container, forwards their interactions to the map, and keeps the range input
/// in step with the map's zoom-changed notification.
pub struct ZoomSliderWidget<M, D>
where
    M: ZoomMap + ?Sized + 'static,
    D: WidgetDocument + 'static,
{
    control: ZoomControl<M>,
    document: Rc<D>,
    config: ZoomSliderConfig,
    controls: ZoomSliderControls<D::Element>,
}

impl<M, D> ZoomSliderWidget<M, D>
where
    M: ZoomMap + ?Sized + 'static,
    D: WidgetDocument + 'static,
    D::Element: 'static,
{
    /// Builds a widget with the default configuration (`0..=21` in `#zoomSlider`).
    ///
    /// # Errors
    ///
    /// See [`ZoomSliderWidget::create`].
    pub fn with_defaults(map: Rc<M>, document: Rc<D>) -> Result<Self, SliderError> {
        Self::create(map, document, ZoomSliderConfig::default())
    }

    /// Builds the widget and wires it to `map`.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidBounds`] for inverted bounds,
    /// [`SliderError::ContainerNotFound`] when the container is missing (checked before any
    /// element is created), and [`SliderError::Host`] when the document or map rejects an
    /// operation. Nothing is appended to the container unless construction succeeds.
    pub fn create(
        map: Rc<M>,
        document: Rc<D>,
        config: ZoomSliderConfig,
    ) -> Result<Self, SliderError> {
        config.validate()?;
        let container = document.element_by_id(&config.container_id).ok_or_else(|| {
            SliderError::ContainerNotFound {
                id: config.container_id.clone(),
            }
        })?;

        let control = ZoomControl::new(map);
        let controls = create_controls(document.as_ref(), &config, control.current())?;
        bind_controls(document.as_ref(), &controls, &control)?;

        let map_ref: Weak<M> = Rc::downgrade(control.map());
        let listener_document = Rc::clone(&document);
        let range = controls.range.clone();
        control
            .map()
            .subscribe_zoom_changed(Box::new(move || {
                if let Some(map) = map_ref.upgrade() {
                    sync_range(map.as_ref(), listener_document.as_ref(), &range);
                }
            }))
            .map_err(SliderError::Host)?;

        // Controls only become visible once the binding is complete.
        for element in [&controls.increase, &controls.range, &controls.decrease] {
            document
                .append_child(&container, element)
                .map_err(SliderError::Host)?;
        }

        tracing::debug!(
            container = %config.container_id,
            min_zoom = config.min_zoom,
            max_zoom = config.max_zoom,
            zoom = control.current(),
            "zoom slider created"
        );

        Ok(Self {
            control,
            document,
            config,
            controls,
        })
    }

    /// Zooms the map in by one level.
    pub fn increase_zoom(&self) {
        self.control.increase();
    }

    /// Zooms the map out by one level.
    pub fn decrease_zoom(&self) {
        self.control.decrease();
    }

    /// Sets the map zoom from a committed range value. Non-numeric text is ignored.
    pub fn update_slider(&self, value: &str) {
        self.control.commit(value);
    }

    /// Writes the map zoom into the range input if the two differ.
    ///
    /// Returns `true` when the input was written. Never calls back into the map's setter.
    pub fn sync_slider(&self) -> bool {
        sync_range(
            self.control.map().as_ref(),
            self.document.as_ref(),
            &self.controls.range,
        )
    }

    /// Current text value of the range input.
    pub fn displayed_value(&self) -> String {
        self.document.value(&self.controls.range)
    }

    /// Resolved configuration.
    pub fn config(&self) -> &ZoomSliderConfig {
        &self.config
    }

    /// Elements the widget created.
    pub fn controls(&self) -> &ZoomSliderControls<D::Element> {
        &self.controls
    }

    /// Bound map.
    pub fn map(&self) -> &Rc<M> {
        self.control.map()
    }

    /// Facade used by the control handlers.
    pub fn control(&self) -> &ZoomControl<M> {
        &self.control
    }
}

fn create_controls<D: WidgetDocument>(
    document: &D,
    config: &ZoomSliderConfig,
    zoom: i32,
) -> Result<ZoomSliderControls<D::Element>, SliderError> {
    let increase = document
        .create_element(ElementKind::Div)
        .map_err(SliderError::Host)?;
    let decrease = document
        .create_element(ElementKind::Div)
        .map_err(SliderError::Host)?;
    let range = document
        .create_element(ElementKind::Input)
        .map_err(SliderError::Host)?;

    let min = config.min_zoom.to_string();
    let max = config.max_zoom.to_string();
    let attributes: [(&D::Element, &str, &str); 10] = [
        (&increase, "id", INCREASE_CONTROL_ID),
        (&increase, "class", ZOOM_BUTTON_CLASS),
        (&decrease, "id", DECREASE_CONTROL_ID),
        (&decrease, "class", ZOOM_BUTTON_CLASS),
        // Bounds must be set before the value is written.
        (&range, "type", "range"),
        (&range, "min", min.as_str()),
        (&range, "max", max.as_str()),
        (&range, "step", "1"),
        (&range, "id", RANGE_CONTROL_ID),
        (&range, "aria-label", "Zoom level"),
    ];
    for (element, name, value) in attributes {
        document
            .set_attribute(element, name, value)
            .map_err(SliderError::Host)?;
    }
    document.set_value(&range, &zoom.to_string());

    Ok(ZoomSliderControls {
        increase,
        range,
        decrease,
    })
}

fn bind_controls<M, D>(
    document: &D,
    controls: &ZoomSliderControls<D::Element>,
    control: &ZoomControl<M>,
) -> Result<(), SliderError>
where
    M: ZoomMap + ?Sized + 'static,
    D: WidgetDocument,
{
    let on_increase = control.clone();
    document
        .on_click(&controls.increase, Box::new(move || on_increase.increase()))
        .map_err(SliderError::Host)?;

    let on_decrease = control.clone();
    document
        .on_click(&controls.decrease, Box::new(move || on_decrease.decrease()))
        .map_err(SliderError::Host)?;

    let on_commit = control.clone();
    document
        .on_commit(
            &controls.range,
            Box::new(move |value| {
                on_commit.commit(&value);
            }),
        )
        .map_err(SliderError::Host)?;
    Ok(())
}

fn sync_range<M, D>(map: &M, document: &D, range: &D::Element) -> bool
where
    M: ZoomMap + ?Sized,
    D: WidgetDocument,
{
    let zoom = map.zoom();
    if parse_zoom_value(&document.value(range)) == Some(zoom) {
        return false;
    }
    tracing::debug!(zoom, "zoom slider synced to map");
    document.set_value(range, &zoom.to_string());
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{document::MemoryDocument, map::MemoryZoomMap};

    type MemoryWidget = ZoomSliderWidget<MemoryZoomMap, MemoryDocument>;

    fn widget_at(zoom: i32) -> (Rc<MemoryZoomMap>, Rc<MemoryDocument>, MemoryWidget) {
        let map = Rc::new(MemoryZoomMap::new(zoom));
        let document = Rc::new(MemoryDocument::with_container("zoomSlider"));
        let widget = ZoomSliderWidget::with_defaults(map.clone(), document.clone())
            .expect("create widget");
        (map, document, widget)
    }

    #[test]
    fn range_input_carries_bounds_and_step() {
        let (_, document, widget) = widget_at(7);
        let range = widget.controls().range;
        assert_eq!(document.tag(range), Some("input"));
        assert_eq!(document.attribute(range, "type").as_deref(), Some("range"));
        assert_eq!(document.attribute(range, "min").as_deref(), Some("0"));
        assert_eq!(document.attribute(range, "max").as_deref(), Some("21"));
        assert_eq!(document.attribute(range, "step").as_deref(), Some("1"));
        assert_eq!(widget.displayed_value(), "7");
    }

    #[test]
    fn buttons_share_class_and_keep_distinct_ids() {
        let (_, document, widget) = widget_at(1);
        let controls = widget.controls();
        for element in [controls.increase, controls.decrease] {
            assert_eq!(document.tag(element), Some("div"));
            assert_eq!(document.attribute(element, "class").as_deref(), Some("zoomBtn"));
        }
        assert_eq!(
            document.attribute(controls.increase, "id").as_deref(),
            Some("incZoom")
        );
        assert_eq!(
            document.attribute(controls.decrease, "id").as_deref(),
            Some("decZoom")
        );
    }

    #[test]
    fn sync_slider_reports_whether_it_wrote() {
        let (map, document, widget) = widget_at(5);
        let range = widget.controls().range;
        let before = document.value_writes(range);

        assert!(!widget.sync_slider());
        assert_eq!(document.value_writes(range), before);

        map.set_zoom_externally(6);
        assert_eq!(widget.displayed_value(), "6");
        assert!(!widget.sync_slider());
    }

    #[test]
    fn construction_registers_a_single_zoom_listener() {
        let (map, _, _widget) = widget_at(2);
        assert_eq!(map.listener_count(), 1);
        assert_eq!(map.set_zoom_calls(), 0);
    }
}
