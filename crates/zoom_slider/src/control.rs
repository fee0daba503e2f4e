//! Zoom-control facade shared by every control that writes the map's zoom.

use std::rc::Rc;

use crate::{config::parse_zoom_value, map::ZoomMap};

/// Clonable handle that turns control interactions into map zoom requests.
///
/// Increments and decrements are not clamped here; the host map owns its zoom bounds.
pub struct ZoomControl<M: ZoomMap + ?Sized> {
    map: Rc<M>,
}

impl<M: ZoomMap + ?Sized> Clone for ZoomControl<M> {
    fn clone(&self) -> Self {
        Self {
            map: Rc::clone(&self.map),
        }
    }
}

impl<M: ZoomMap + ?Sized> ZoomControl<M> {
    /// Wraps a shared map.
    pub fn new(map: Rc<M>) -> Self {
        Self { map }
    }

    /// Returns the controlled map.
    pub fn map(&self) -> &Rc<M> {
        &self.map
    }

    /// Current zoom of the map.
    pub fn current(&self) -> i32 {
        self.map.zoom()
    }

    /// Requests `current + 1`.
    pub fn increase(&self) {
        let next = self.map.zoom().saturating_add(1);
        tracing::debug!(zoom = next, "zoom slider increase");
        self.map.set_zoom(next);
    }

    /// Requests `current - 1`.
    pub fn decrease(&self) {
        let next = self.map.zoom().saturating_sub(1);
        tracing::debug!(zoom = next, "zoom slider decrease");
        self.map.set_zoom(next);
    }

    /// Requests the zoom committed by the range control. Text that does not start with an
    /// integer is ignored.
    ///
    /// Returns the zoom that was requested, if any.
    pub fn commit(&self, raw: &str) -> Option<i32> {
        let Some(zoom) = parse_zoom_value(raw) else {
            tracing::warn!(value = raw, "ignoring non-numeric zoom slider commit");
            return None;
        };
        tracing::debug!(zoom, "zoom slider commit");
        self.map.set_zoom(zoom);
        Some(zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MemoryZoomMap;

    #[test]
    fn steps_do_not_clamp_on_their_own() {
        let map = Rc::new(MemoryZoomMap::new(21));
        let control = ZoomControl::new(map.clone());
        control.increase();
        assert_eq!(map.zoom(), 22);

        map.set_zoom_externally(0);
        control.decrease();
        assert_eq!(map.zoom(), -1);
    }

    #[test]
    fn commit_forwards_integer_and_ignores_garbage() {
        let map = Rc::new(MemoryZoomMap::new(3));
        let shared: Rc<dyn ZoomMap> = map.clone();
        let control = ZoomControl::new(shared);

        assert_eq!(control.commit("15"), Some(15));
        assert_eq!(map.zoom(), 15);

        assert_eq!(control.commit("abc"), None);
        assert_eq!(map.zoom(), 15);
        assert_eq!(map.set_zoom_calls(), 1);
    }
}
