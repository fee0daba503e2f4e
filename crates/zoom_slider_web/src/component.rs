//! Reactive `leptos` rendition of the zoom slider.

use std::rc::Rc;

use leptos::*;
use zoom_slider::{
    SliderError, ZoomControl, ZoomMap, ZoomSliderConfig, DECREASE_CONTROL_ID,
    INCREASE_CONTROL_ID, RANGE_CONTROL_ID, ZOOM_BUTTON_CLASS,
};

/// Creates a signal holding the map zoom and keeps it updated from the map's zoom-changed
/// notification. The signal is only written when the value differs.
///
/// [`ZoomMap`] has no unsubscribe, so each call adds one listener to the map for the map's
/// lifetime. Once the signal is disposed the listener does nothing.
///
/// # Errors
///
/// Returns [`SliderError::Host`] when the map rejects the subscription.
pub fn bind_zoom_signal(map: Rc<dyn ZoomMap>) -> Result<RwSignal<i32>, SliderError> {
    let zoom = create_rw_signal(map.zoom());
    let map_ref = Rc::downgrade(&map);
    map.subscribe_zoom_changed(Box::new(move || {
        let Some(map) = map_ref.upgrade() else {
            return;
        };
        let next = map.zoom();
        if zoom.try_get_untracked().is_some_and(|current| current != next) {
            zoom.set(next);
        }
    }))
    .map_err(SliderError::Host)?;
    Ok(zoom)
}

/// Validated config, zoom facade, and live zoom signal backing a [`ZoomSlider`].
pub struct ZoomSliderBinding {
    /// Resolved configuration.
    pub config: ZoomSliderConfig,
    /// Facade the controls forward to.
    pub control: ZoomControl<dyn ZoomMap>,
    /// Map zoom, kept current by the zoom-changed notification.
    pub zoom: RwSignal<i32>,
}

impl ZoomSliderBinding {
    /// Validates `config` and subscribes to the map.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidBounds`] for inverted bounds (before touching the map)
    /// and [`SliderError::Host`] when the subscription fails.
    pub fn new(map: Rc<dyn ZoomMap>, config: ZoomSliderConfig) -> Result<Self, SliderError> {
        config.validate()?;
        let control = ZoomControl::new(Rc::clone(&map));
        let zoom = bind_zoom_signal(map)?;
        Ok(Self {
            config,
            control,
            zoom,
        })
    }
}

#[component]
/// Zoom slider rendered declaratively: the same three controls, ids, and order as the
/// imperative widget, inside a container carrying the configured id.
///
/// Renders nothing, and logs an error, when the config or the map subscription is rejected.
pub fn ZoomSlider(
    map: Rc<dyn ZoomMap>,
    #[prop(optional)] config: Option<ZoomSliderConfig>,
) -> impl IntoView {
    let ZoomSliderBinding {
        config,
        control,
        zoom,
    } = match ZoomSliderBinding::new(map, config.unwrap_or_default()) {
        Ok(binding) => binding,
        Err(err) => {
            tracing::error!(%err, "zoom slider not rendered");
            return ().into_view();
        }
    };

    let on_increase = control.clone();
    let on_decrease = control.clone();
    let on_commit = control;

    view! {
        <div id=config.container_id.clone() data-ui-kind="zoom-slider">
            <div
                id=INCREASE_CONTROL_ID
                class=ZOOM_BUTTON_CLASS
                on:click=move |_| on_increase.increase()
            ></div>
            <input
                type="range"
                id=RANGE_CONTROL_ID
                min=config.min_zoom.to_string()
                max=config.max_zoom.to_string()
                step="1"
                aria-label="Zoom level"
                prop:value=move || zoom.get().to_string()
                on:change=move |ev| {
                    on_commit.commit(&event_target_value(&ev));
                }
            />
            <div
                id=DECREASE_CONTROL_ID
                class=ZOOM_BUTTON_CLASS
                on:click=move |_| on_decrease.decrease()
            ></div>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zoom_slider::{MemoryZoomMap, ZoomChangedListener};

    use super::*;

    #[test]
    fn zoom_signal_follows_external_changes() {
        let runtime = create_runtime();
        let map = Rc::new(MemoryZoomMap::new(5));
        let zoom = bind_zoom_signal(map.clone()).expect("bind signal");
        assert_eq!(zoom.get_untracked(), 5);

        map.set_zoom_externally(8);
        assert_eq!(zoom.get_untracked(), 8);
        assert_eq!(map.set_zoom_calls(), 0);
        runtime.dispose();
    }

    #[test]
    fn zoom_signal_tracks_control_requests() {
        let runtime = create_runtime();
        let map = Rc::new(MemoryZoomMap::new(3));
        let zoom = bind_zoom_signal(map.clone()).expect("bind signal");
        let control = ZoomControl::new(map.clone());

        control.increase();
        control.commit("12");
        control.commit("bogus");
        assert_eq!(zoom.get_untracked(), 12);
        assert_eq!(map.set_zoom_calls(), 2);
        runtime.dispose();
    }

    #[test]
    fn binding_rejects_inverted_bounds_before_subscribing() {
        let runtime = create_runtime();
        let map = Rc::new(MemoryZoomMap::new(5));
        let config = ZoomSliderConfig {
            min_zoom: 12,
            max_zoom: 2,
            ..ZoomSliderConfig::default()
        };
        let err = ZoomSliderBinding::new(map.clone(), config)
            .err()
            .expect("inverted bounds should be rejected");

        assert_eq!(err, SliderError::InvalidBounds { min: 12, max: 2 });
        assert_eq!(map.listener_count(), 0);
        runtime.dispose();
    }

    struct ClosedMap;

    impl ZoomMap for ClosedMap {
        fn zoom(&self) -> i32 {
            4
        }

        fn set_zoom(&self, _zoom: i32) {}

        fn subscribe_zoom_changed(&self, _listener: ZoomChangedListener) -> Result<(), String> {
            Err("listeners unavailable".to_string())
        }
    }

    #[test]
    fn binding_surfaces_subscription_failure() {
        let runtime = create_runtime();
        let err = ZoomSliderBinding::new(Rc::new(ClosedMap), ZoomSliderConfig::default())
            .err()
            .expect("subscription failure should be reported");

        assert_eq!(err, SliderError::Host("listeners unavailable".to_string()));
        runtime.dispose();
    }

    #[test]
    fn binding_keeps_config_and_live_zoom() {
        let runtime = create_runtime();
        let map = Rc::new(MemoryZoomMap::new(7));
        let binding =
            ZoomSliderBinding::new(map.clone(), ZoomSliderConfig::default()).expect("bind");

        binding.control.increase();
        assert_eq!(binding.zoom.get_untracked(), 8);
        assert_eq!(binding.config, ZoomSliderConfig::default());
        runtime.dispose();
    }

    #[test]
    fn disposed_signal_ignores_later_zoom_changes() {
        let runtime = create_runtime();
        let map = Rc::new(MemoryZoomMap::new(2));
        bind_zoom_signal(map.clone()).expect("bind signal");
        runtime.dispose();

        map.set_zoom_externally(9);
        assert_eq!(map.zoom(), 9);
        assert_eq!(map.listener_count(), 1);
    }
}
